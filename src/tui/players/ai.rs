//! AI player backed by the exhaustive minimax search.

use super::Player;
use anyhow::Result;
use noughts::{best_move, Board, Mark};
use tracing::debug;

/// Player that always makes the optimal move.
pub struct MinimaxPlayer {
    name: String,
    mark: Mark,
}

impl MinimaxPlayer {
    /// Creates a new AI player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn choose(&mut self, board: &mut Board) -> Result<usize> {
        let cell = best_move(board, self.mark);
        debug!(cell, mark = %self.mark, "search selected move");
        Ok(cell)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
