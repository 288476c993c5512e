//! Noughts and Crosses core - board state and exact minimax search
//!
//! This library holds the game-theoretic core of the bundled terminal game:
//!
//! - **Board**: a square grid of cells with win/draw/validity predicates and
//!   reversible in-place mutation
//! - **Search**: exhaustive minimax with alpha-beta pruning that selects the
//!   optimal move for a mark
//!
//! The terminal interface and the turn-sequencing driver live in the binary;
//! they apply the search's chosen cell through the same board mutation a
//! human move uses.
//!
//! # Example
//!
//! ```
//! use noughts::{best_move, Board, Mark, Square};
//!
//! let mut board = Board::new(3);
//! board.set(0, Square::Occupied(Mark::Cross)).unwrap();
//! board.set(1, Square::Occupied(Mark::Cross)).unwrap();
//! board.set(3, Square::Occupied(Mark::Nought)).unwrap();
//! board.set(4, Square::Occupied(Mark::Nought)).unwrap();
//!
//! // Cross completes its top row rather than blocking.
//! assert_eq!(best_move(&mut board, Mark::Cross), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod minimax;

// Crate-level exports - Board types
pub use board::{Board, BoardError, Mark, Square};

// Crate-level exports - Search
pub use minimax::best_move;
