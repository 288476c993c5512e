//! Game orchestration between players.

use super::players::Player;
use anyhow::Result;
use noughts::{Board, Mark, Square};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The human player may enter a move.
    AwaitingInput,
    /// The AI is searching for its move.
    Thinking {
        /// Display name of the searching player.
        name: String,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the player that moved.
        name: String,
        /// The mark that was placed.
        mark: Mark,
        /// The cell the mark was placed in.
        cell: usize,
    },
    /// Game ended.
    GameOver {
        /// The winning mark, or `None` for a draw.
        winner: Option<Mark>,
    },
}

/// Orchestrates one game between two players.
///
/// Owns the live board for the duration of the game. A player borrows the
/// board mutably only while choosing a move, and must hand it back
/// unchanged; the chosen cell is then applied here, identically for human
/// and AI moves.
pub struct Orchestrator {
    board: Board,
    nought: Box<dyn Player>,
    cross: Box<dyn Player>,
    to_move: Mark,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator. Nought moves first.
    pub fn new(
        board: Board,
        nought: Box<dyn Player>,
        cross: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            board,
            nought,
            cross,
            to_move: Mark::Nought,
            event_tx,
        }
    }

    /// Runs the game loop until a win or draw.
    pub async fn run(&mut self) -> Result<()> {
        info!("starting game loop");

        loop {
            // End states are checked before every ply so a finished game is
            // never handed to a player.
            if let Some(winner) = self.winner() {
                info!(winner = %winner, "game over");
                self.event_tx.send(GameEvent::GameOver {
                    winner: Some(winner),
                })?;
                return Ok(());
            }
            if self.board.is_draw() {
                info!("game drawn");
                self.event_tx.send(GameEvent::GameOver { winner: None })?;
                return Ok(());
            }

            let mark = self.to_move;
            let player = match mark {
                Mark::Nought => &mut self.nought,
                Mark::Cross => &mut self.cross,
            };
            let name = player.name().to_string();

            if player.is_human() {
                self.event_tx.send(GameEvent::AwaitingInput)?;
            } else {
                self.event_tx.send(GameEvent::Thinking { name: name.clone() })?;
            }

            debug!(player = %name, mark = %mark, "waiting for move");
            let cell = player.choose(&mut self.board).await?;

            self.board
                .set(cell, Square::Occupied(mark))
                .map_err(|e| anyhow::anyhow!("{name} made an invalid move: {e}"))?;

            self.event_tx.send(GameEvent::MoveMade { name, mark, cell })?;

            self.to_move = mark.opponent();
        }
    }

    fn winner(&self) -> Option<Mark> {
        [Mark::Nought, Mark::Cross]
            .into_iter()
            .find(|&mark| self.board.is_win(mark))
    }
}
