//! Terminal UI and turn-sequencing driver.

#![warn(missing_docs)]

mod app;
mod input;
mod orchestrator;
mod players;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::{Board, Mark};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::cli::Cli;
use app::{App, Phase};
use input::Action;
use orchestrator::{GameEvent, Orchestrator};
use players::{HumanPlayer, MinimaxPlayer, Player};

/// Standard 3x3 Noughts and Crosses size. The board and search generalise
/// to any square size, but the screen layout and digit input do not.
const BOARD_SIZE: usize = 3;

/// Runs the terminal game until the user quits.
pub async fn run(cli: Cli) -> Result<()> {
    // Log to a file to avoid interfering with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
    }

    res
}

/// A game running in a background task, fed keys over a channel.
struct RunningGame {
    input_tx: mpsc::UnboundedSender<KeyCode>,
    handle: JoinHandle<()>,
}

/// Spawns an orchestrator task for one game. The user plays `user`, the AI
/// plays the other mark; Nought always moves first.
fn spawn_game(user: Mark, event_tx: mpsc::UnboundedSender<GameEvent>) -> RunningGame {
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", user, input_rx));
    let ai: Box<dyn Player> = Box::new(MinimaxPlayer::new("The AI", user.opponent()));
    let (nought, cross) = match user {
        Mark::Nought => (human, ai),
        Mark::Cross => (ai, human),
    };

    let mut orchestrator = Orchestrator::new(Board::new(BOARD_SIZE), nought, cross, event_tx);
    let handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "orchestrator failed");
        }
    });

    RunningGame { input_tx, handle }
}

/// Main event loop: draw, drain game events, dispatch key presses.
async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let mut app = App::new();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut game: Option<RunningGame> = None;

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match (app.phase(), input::parse_key(key.code)) {
            (_, Action::Quit) => break,

            // Order prompt: yes plays first (Nought), no second (Cross).
            (Phase::OrderPrompt, Action::Yes) => {
                app.begin_game(Mark::Nought);
                game = Some(spawn_game(Mark::Nought, event_tx.clone()));
            }
            (Phase::OrderPrompt, Action::No) => {
                app.begin_game(Mark::Cross);
                game = Some(spawn_game(Mark::Cross, event_tx.clone()));
            }

            // Replay keeps the order chosen at the start of the session.
            (Phase::Over, Action::Yes | Action::Replay) => {
                let user = app.user().expect("finished game has a user mark");
                app.begin_game(user);
                game = Some(spawn_game(user, event_tx.clone()));
            }
            (Phase::Over, Action::No) => break,

            (Phase::Playing, Action::Key(code)) => {
                if let Some(running) = &game {
                    let _ = running.input_tx.send(code);
                }
            }
            _ => {}
        }
    }

    if let Some(running) = game {
        running.handle.abort();
    }

    Ok(())
}
