//! Tic-tac-toe rules and a move history you can travel through.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw checks over one board snapshot
//! - **Position**: named cells and their 1-based row/column
//! - **History**: snapshots, the displayed step, turn and list order
//! - **View**: what a front-end needs to draw a frame
//!
//! # Example
//!
//! ```
//! use backtrack_tictactoe::{GameHistory, Mark, Status};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     game.apply_move(cell)?;
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//!
//! game.jump_to(0)?;
//! assert_eq!(game.status().to_string(), "next turn: X");
//! # Ok::<(), backtrack_tictactoe::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use history::{GameHistory, HistoryEntry, HistoryError, IgnoreReason, MoveOutcome};
pub use position::{Cell, Coordinate, resolve, resolve_index};
pub use rules::{Evaluation, LINES, Line, evaluate};
pub use status::Status;
pub use types::{Board, Mark, Square};
pub use view::{MoveListItem, START_LABEL, ViewState, move_label};
