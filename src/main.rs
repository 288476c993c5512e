//! Noughts and Crosses - terminal game against an optimal AI.
//!
//! The AI searches the full game tree with alpha-beta pruning, so it can
//! never be beaten, only drawn against.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::run(cli).await
}
