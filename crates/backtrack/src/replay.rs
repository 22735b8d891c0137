//! Scripted, non-interactive play.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use backtrack_tictactoe::{Board, GameHistory, MoveOutcome, ViewState};
use tracing::{info, instrument, warn};

/// Parses a comma-separated list of cell indices. Blank input means no moves.
#[instrument]
pub fn parse_moves(moves: &str) -> Result<Vec<usize>> {
    moves
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("Invalid cell index: {:?}", s))
        })
        .collect()
}

/// Plays the moves, then the optional jump and order toggle.
#[instrument]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    toggle_order: bool,
    sort_ascending: bool,
) -> Result<GameHistory> {
    let mut game = GameHistory::with_ascending(sort_ascending);

    for &index in moves {
        if let MoveOutcome::Ignored(reason) = game.apply_move(index)? {
            warn!(index, %reason, "Scripted move ignored");
        }
    }
    if let Some(step) = jump {
        game.jump_to(step)?;
    }
    if toggle_order {
        game.toggle_order();
    }

    info!(step = game.step(), status = %game.status(), "Replay finished");
    Ok(game)
}

/// Renders the view state in the requested format.
pub fn render(view: &ViewState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).context("Failed to serialize view state")
        }
        OutputFormat::Text => Ok(render_text(view)),
    }
}

fn render_text(view: &ViewState) -> String {
    let mut out = Board::from_squares(*view.board()).display();
    out.push_str("\n\n");
    out.push_str(view.status());
    if let Some(line) = view.winner_line() {
        let [a, b, c] = line.indices().map(|i| i + 1);
        out.push_str(&format!(" (cells {a}, {b}, {c})"));
    }
    out.push_str("\n\n");
    for item in view.history_list() {
        let marker = if *item.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", item.label()));
    }
    out
}
