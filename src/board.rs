//! Board state for a square Noughts and Crosses grid.
//!
//! The grid is usually 3x3 but any square size is supported. A player wins
//! by filling a full row, column or diagonal with their mark.

use derive_more::{Display, Error};
use tracing::instrument;

/// A player's mark. `Nought` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// The O player.
    Nought,
    /// The X player.
    Cross,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
        }
    }
}

/// The state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// No mark. Also what a cell is set back to when a move is unmade.
    Empty,
    /// A cell holding a player's mark.
    Occupied(Mark),
}

/// Errors from board mutations that would violate the grid's invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The cell index does not address a cell on this board.
    #[display("cell {cell} is out of range for a board of {len} cells")]
    OutOfRange {
        /// The offending cell index.
        cell: usize,
        /// Number of cells on the board.
        len: usize,
    },
    /// The cell already holds a mark and may not be overwritten.
    #[display("cell {cell} is already occupied")]
    Occupied {
        /// The offending cell index.
        cell: usize,
    },
}

/// A square grid of [`Square`]s in row-major order: `index = row * size + col`.
///
/// The size is fixed at construction. Cells only ever transition between
/// `Empty` and `Occupied`; a mark is never overwritten by another mark
/// without being cleared first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Square>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Square::Empty; size * size],
        }
    }

    /// Clears every cell back to [`Square::Empty`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Square::Empty);
    }

    /// Width (and height) of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the square at `cell`, or `None` when out of range.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.cells.get(cell).copied()
    }

    /// Checks whether `square` may be written to `cell`.
    ///
    /// Clearing (`square == Empty`) is valid for any in-range cell, so
    /// callers unmaking a move pass `Empty` here rather than asserting.
    /// Placing a mark additionally requires the cell to be empty.
    pub fn is_valid_move(&self, cell: usize, square: Square) -> bool {
        cell < self.cells.len()
            && (square == Square::Empty || self.cells[cell] == Square::Empty)
    }

    /// Writes `square` to `cell`.
    ///
    /// # Errors
    ///
    /// Fails without touching the board when the cell is out of range, or
    /// when a mark would overwrite another mark. Callers check
    /// [`Board::is_valid_move`] first; the board does not resolve conflicts.
    pub fn set(&mut self, cell: usize, square: Square) -> Result<(), BoardError> {
        if cell >= self.cells.len() {
            return Err(BoardError::OutOfRange {
                cell,
                len: self.cells.len(),
            });
        }
        if square != Square::Empty && self.cells[cell] != Square::Empty {
            return Err(BoardError::Occupied { cell });
        }
        self.cells[cell] = square;
        Ok(())
    }

    /// Whether `mark` has filled at least one row, column or diagonal.
    pub fn is_win(&self, mark: Mark) -> bool {
        let target = Square::Occupied(mark);

        (0..self.size).any(|row| self.filled_row(row, target))
            || (0..self.size).any(|col| self.filled_col(col, target))
            || self.filled_forward_diag(target)
            || self.filled_backward_diag(target)
    }

    /// Whether the game is drawn: no winner and no empty cell left.
    pub fn is_draw(&self) -> bool {
        !self.is_win(Mark::Nought)
            && !self.is_win(Mark::Cross)
            && self.cells.iter().all(|&square| square != Square::Empty)
    }

    fn filled_row(&self, row: usize, target: Square) -> bool {
        (0..self.size).all(|col| self.cells[row * self.size + col] == target)
    }

    fn filled_col(&self, col: usize, target: Square) -> bool {
        (0..self.size).all(|row| self.cells[row * self.size + col] == target)
    }

    // top-left to bottom-right
    fn filled_forward_diag(&self, target: Square) -> bool {
        (0..self.size).all(|i| self.cells[i * self.size + i] == target)
    }

    // bottom-left to top-right
    fn filled_backward_diag(&self, target: Square) -> bool {
        (0..self.size).all(|i| self.cells[(self.size - 1 - i) * self.size + i] == target)
    }
}
