//! Human player that gets input from keyboard.

use super::Player;
use anyhow::Result;
use crossterm::event::KeyCode;
use noughts::{Board, Mark, Square};
use tokio::sync::mpsc;

/// Human player using keyboard input.
pub struct HumanPlayer {
    name: String,
    mark: Mark,
    input_rx: mpsc::UnboundedReceiver<KeyCode>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        mark: Mark,
        input_rx: mpsc::UnboundedReceiver<KeyCode>,
    ) -> Self {
        Self {
            name: name.into(),
            mark,
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn choose(&mut self, board: &mut Board) -> Result<usize> {
        // Wait for a digit naming a playable cell; anything else is ignored,
        // so mistyped keys just keep the prompt up.
        while let Some(key) = self.input_rx.recv().await {
            if let KeyCode::Char(c) = key {
                if let Some(digit) = c.to_digit(10) {
                    let cell = digit as usize;
                    if board.is_valid_move(cell, Square::Occupied(self.mark)) {
                        return Ok(cell);
                    }
                }
            }
        }

        anyhow::bail!("input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
