//! Player trait and implementations.

mod ai;
mod human;

pub use ai::MinimaxPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use noughts::Board;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Picks a cell to play on `board`.
    ///
    /// The board is handed out mutably so the search can make and unmake
    /// speculative moves; every implementation must return the board in
    /// its original state. The orchestrator applies the returned cell.
    async fn choose(&mut self, board: &mut Board) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether this player is driven by keyboard input.
    fn is_human(&self) -> bool {
        false
    }
}
