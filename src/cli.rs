//! Command-line interface for noughts.

use clap::Parser;

/// Noughts and Crosses - play against an unbeatable minimax AI
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play Noughts and Crosses against an unbeatable AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write logs to (the game screen hides stderr)
    #[arg(long, default_value = "noughts.log")]
    pub log_file: std::path::PathBuf,
}
