//! Backtrack - tic-tac-toe with time travel
//!
//! Plays interactively in the terminal or replays a scripted game.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use config::AppConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay {
            moves,
            jump,
            toggle_order,
            format,
        } => {
            // Must precede run_replay so its span is recorded
            init_stderr_tracing(&config);
            println!("{}", run_replay(&config, &moves, jump, toggle_order, format)?);
            Ok(())
        }
    }
}

/// Send tracing output to stderr, keeping stdout for the rendered view.
fn init_stderr_tracing(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Replay a scripted game and render the final view.
#[instrument(skip(config))]
fn run_replay(
    config: &AppConfig,
    moves: &str,
    jump: Option<usize>,
    toggle_order: bool,
    format: OutputFormat,
) -> Result<String> {
    info!("Starting replay");

    let moves = replay::parse_moves(moves)?;
    let game = replay::replay(&moves, jump, toggle_order, *config.sort_ascending())?;
    replay::render(&game.view_state(), format)
}
