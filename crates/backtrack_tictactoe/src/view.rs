//! Read-only projection of a [`GameHistory`] for front-ends.

use crate::history::{GameHistory, HistoryEntry};
use crate::rules::Line;
use crate::types::Square;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Label of the opening entry in the move list.
pub const START_LABEL: &str = "Go to start of game";

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveListItem {
    /// History step this row jumps to.
    step: usize,
    /// Text shown for the row.
    label: String,
    /// True for the displayed step, which front-ends render emphasized.
    is_current: bool,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ViewState {
    /// Squares of the displayed snapshot.
    board: [Square; 9],
    /// Cells to highlight when a line is complete.
    winner_line: Option<Line>,
    /// Status line text.
    status: String,
    /// Move list in display order.
    history_list: Vec<MoveListItem>,
    /// Whether the move list runs oldest first.
    sort_ascending: bool,
}

/// Move-list label for a history entry.
pub fn move_label(step: usize, entry: &HistoryEntry) -> String {
    match entry.position() {
        Some(coordinate) if step > 0 => format!("Go to move #{step} | {coordinate}"),
        _ => START_LABEL.to_string(),
    }
}

impl GameHistory {
    /// Projects the session into what a front-end renders.
    #[instrument(skip(self), fields(step = self.step()))]
    pub fn view_state(&self) -> ViewState {
        let mut history_list: Vec<MoveListItem> = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                label: move_label(step, entry),
                is_current: step == self.step(),
            })
            .collect();
        if !self.is_ascending() {
            history_list.reverse();
        }

        ViewState {
            board: *self.current_board().squares(),
            winner_line: self.evaluation().line(),
            status: self.status().to_string(),
            history_list,
            sort_ascending: self.is_ascending(),
        }
    }
}
