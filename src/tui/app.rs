//! Application state and logic.

use noughts::{Board, Mark, Square};
use tracing::{debug, warn};

use super::orchestrator::GameEvent;
use super::BOARD_SIZE;

/// What the screen is currently asking of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Asking whether the user wants to move first.
    OrderPrompt,
    /// A game is running.
    Playing,
    /// The game ended; asking about a replay.
    Over,
}

/// Main application state.
///
/// Holds a mirror of the orchestrator's board, updated from [`GameEvent`]s,
/// so the UI never reads the live board while a search may be mutating it.
pub struct App {
    board: Board,
    user: Option<Mark>,
    phase: Phase,
    status_message: String,
}

impl App {
    /// Creates a new application at the order prompt.
    pub fn new() -> Self {
        Self {
            board: Board::new(BOARD_SIZE),
            user: None,
            phase: Phase::OrderPrompt,
            status_message: "Do you want to go first? (y or n)".to_string(),
        }
    }

    /// The board as last reported by the orchestrator.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current screen phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The user's mark, once the order prompt is answered.
    pub fn user(&self) -> Option<Mark> {
        self.user
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Starts a fresh game with the user playing `user`.
    pub fn begin_game(&mut self, user: Mark) {
        debug!(user = %user, "beginning game");
        self.board.reset();
        self.user = Some(user);
        self.phase = Phase::Playing;
        self.status_message = "Waiting for the first move...".to_string();
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "handling game event");

        match event {
            GameEvent::AwaitingInput => {
                self.status_message = "What is your move? (0 to 8)".to_string();
            }
            GameEvent::Thinking { name } => {
                self.status_message = format!("{name} is thinking...");
            }
            GameEvent::MoveMade { name, mark, cell } => {
                if let Err(e) = self.board.set(cell, Square::Occupied(mark)) {
                    // the orchestrator validated the move, so this means the
                    // mirror fell out of sync
                    warn!(error = %e, cell, "could not mirror move");
                }
                self.status_message = format!("{name} played cell {cell}");
            }
            GameEvent::GameOver { winner } => {
                self.phase = Phase::Over;
                let outcome = match (winner, self.user) {
                    (Some(mark), Some(user)) if mark == user => "You WON!",
                    (Some(_), _) => "You LOSE!",
                    (None, _) => "You DREW!",
                };
                self.status_message =
                    format!("{outcome} Play again? (y or n, q to quit)");
            }
        }
    }
}
