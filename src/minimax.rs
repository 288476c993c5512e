//! Exact game-tree search: minimax with alpha-beta pruning.
//!
//! The search is exhaustive, not heuristic. On a 3x3 board the selected
//! move can never lose a game, only win or draw it. Depth feeds into the
//! score so that among equal outcomes the fastest win (or slowest loss)
//! is preferred.

use std::cmp::{max, min};

use tracing::{debug, instrument};

use crate::board::{Board, Mark, Square};

// Base scores of each end state. Depth is added to or subtracted from the
// bases, so they must not overflow across the deepest possible search:
// depth <= size * size, which keeps i8 safe for boards up to 11x11. Widen
// the score type before porting to anything larger.
const SCORE_WIN: i8 = i8::MAX;
const SCORE_LOSE: i8 = i8::MIN;
const SCORE_DRAW: i8 = 0;

/// Finds the optimal cell for `mark` to play on `board`.
///
/// Every currently legal move is made in place, scored recursively and
/// unmade again, so the board is returned to its exact pre-call contents.
/// Ties between equally scored cells keep the lowest index.
///
/// # Panics
///
/// Panics when the board has no legal move left. The driver checks for an
/// ended game before asking the search for a move.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, mark: Mark) -> usize {
    let other = mark.opponent();

    let mut alpha = SCORE_LOSE;
    let beta = SCORE_WIN;
    let mut best = None;

    // try and score every valid move for `mark` in ascending cell order
    for cell in 0..board.cell_count() {
        if board.is_valid_move(cell, Square::Occupied(mark)) {
            board.set(cell, Square::Occupied(mark)).expect("move was validated");
            let score = minimise(board, mark, other, 1, alpha, beta);
            board.set(cell, Square::Empty).expect("cell is in range");

            if score > alpha {
                alpha = score;
                best = Some(cell);
            }
        }
    }

    let cell = best.expect("no legal move left on the board");
    debug!(cell, score = alpha, "search finished");
    cell
}

/// Scores the opponent's reply turn. The opponent plays optimally, so the
/// lowest score among its moves comes back up.
fn minimise(board: &mut Board, own: Mark, other: Mark, depth: u8, alpha: i8, beta: i8) -> i8 {
    // a win for `own` is not possible when the opponent moved last
    if board.is_win(other) {
        // losses further in the future score higher than near ones
        return SCORE_LOSE + depth as i8;
    }
    if board.is_draw() {
        return SCORE_DRAW;
    }

    let mut beta = beta;
    for cell in 0..board.cell_count() {
        if board.is_valid_move(cell, Square::Occupied(other)) {
            board.set(cell, Square::Occupied(other)).expect("move was validated");
            let score = maximise(board, own, other, depth + 1, alpha, beta);
            board.set(cell, Square::Empty).expect("cell is in range");

            beta = min(beta, score);

            // fail hard: the branch cannot improve on the caller's bound
            if beta <= alpha {
                return alpha;
            }
        }
    }

    beta
}

/// Scores our own turn: the highest score among our moves comes back up.
fn maximise(board: &mut Board, own: Mark, other: Mark, depth: u8, alpha: i8, beta: i8) -> i8 {
    // a loss is not possible when we moved last
    if board.is_win(own) {
        // near wins score higher than far ones
        return SCORE_WIN - depth as i8;
    }
    if board.is_draw() {
        return SCORE_DRAW;
    }

    let mut alpha = alpha;
    for cell in 0..board.cell_count() {
        if board.is_valid_move(cell, Square::Occupied(own)) {
            board.set(cell, Square::Occupied(own)).expect("move was validated");
            let score = minimise(board, own, other, depth + 1, alpha, beta);
            board.set(cell, Square::Empty).expect("cell is in range");

            alpha = max(alpha, score);

            if alpha >= beta {
                return beta;
            }
        }
    }

    alpha
}
