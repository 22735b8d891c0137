//! Command-line interface for backtrack.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Backtrack - tic-tac-toe with a move list you can jump back through
#[derive(Parser, Debug)]
#[command(name = "backtrack")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "backtrack.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a scripted list of moves and print the resulting view
    Replay {
        /// Comma-separated cell indices (0-8, row-major)
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Step to jump to after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Flip the move-list order after the moves
        #[arg(long)]
        toggle_order: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints its result
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board grid, status and move list
    Text,
    /// The view state as pretty JSON
    Json,
}
