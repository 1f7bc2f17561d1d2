//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a browsable, rewindable history
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "rewind_games.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply actions without a UI and print the result
    Script {
        /// Print a JSON summary instead of the board
        #[arg(long)]
        json: bool,

        /// Cell index 0-8 or label, `@N` to jump to step N, or `replay`
        #[arg(required = true, allow_hyphen_values = true)]
        actions: Vec<String>,
    },
}
