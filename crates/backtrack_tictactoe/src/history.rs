//! Move history with time travel.
//!
//! [`GameHistory`] owns every board snapshot produced so far, a pointer to the
//! snapshot being shown, whose turn it is and the move-list order. Jumping
//! back only moves the pointer; the next move made from there discards the
//! abandoned future before it is recorded.

use crate::position::{Cell, Coordinate, resolve};
use crate::rules::{Evaluation, evaluate, is_full};
use crate::status::Status;
use crate::types::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One recorded snapshot and the cell that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell changed from the previous snapshot; `None` for the opening entry.
    position: Option<Coordinate>,
}

impl HistoryEntry {
    fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }
}

/// Result of a move request the game accepted as well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and recorded.
    Applied,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Why a move left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a completed line.
    #[display("game already won")]
    GameWon,
    /// The cell already holds a mark.
    #[display("cell already occupied")]
    Occupied,
}

/// Caller passed an index outside the game's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Cell index outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    CellOutOfRange(usize),
    /// Step index past the last recorded snapshot.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded entries.
        len: usize,
    },
    /// A stored session breaks the history invariants.
    #[display("Invalid session: {_0}")]
    InvalidSession(&'static str),
}

impl std::error::Error for HistoryError {}

/// Session state for one game: snapshots, step pointer, turn and list order.
///
/// Deserialization goes through a check that the first snapshot is the empty
/// opening board and that the step points at a recorded snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSession")]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
    step: usize,
    to_move: Mark,
    ascending: bool,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct StoredSession {
    entries: Vec<HistoryEntry>,
    step: usize,
    to_move: Mark,
    ascending: bool,
}

impl TryFrom<StoredSession> for GameHistory {
    type Error = HistoryError;

    fn try_from(stored: StoredSession) -> Result<Self, Self::Error> {
        let first = stored
            .entries
            .first()
            .ok_or(HistoryError::InvalidSession("no snapshots recorded"))?;
        if *first != HistoryEntry::start() {
            return Err(HistoryError::InvalidSession(
                "first snapshot is not the empty board",
            ));
        }
        if stored.step >= stored.entries.len() {
            return Err(HistoryError::StepOutOfRange {
                step: stored.step,
                len: stored.entries.len(),
            });
        }
        Ok(Self {
            entries: stored.entries,
            step: stored.step,
            to_move: stored.to_move,
            ascending: stored.ascending,
        })
    }
}

impl GameHistory {
    /// Starts a game on an empty board, X to move, newest move listed first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_ascending(false)
    }

    /// Starts a game with the given initial move-list order.
    #[instrument]
    pub fn with_ascending(ascending: bool) -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
            step: 0,
            to_move: Mark::X,
            ascending,
        }
    }

    /// Places the active mark at a raw cell index.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::CellOutOfRange`] for indices past 8. The game
    /// is left unchanged.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, HistoryError> {
        let cell = Cell::from_index(index).ok_or(HistoryError::CellOutOfRange(index))?;
        Ok(self.place(cell))
    }

    /// Places the active mark at `cell` on the displayed board.
    ///
    /// Ignored when the displayed board is already won or the cell is taken.
    /// Otherwise any snapshots after the current step are dropped, the new
    /// snapshot is appended and becomes current, and the turn passes.
    #[instrument(skip(self), fields(step = self.step, mark = %self.to_move))]
    pub fn place(&mut self, cell: Cell) -> MoveOutcome {
        let current = *self.current_board();

        if evaluate(&current).is_won() {
            debug!(reason = %IgnoreReason::GameWon, "Move ignored");
            return MoveOutcome::Ignored(IgnoreReason::GameWon);
        }
        if !current.is_empty(cell) {
            debug!(reason = %IgnoreReason::Occupied, "Move ignored");
            return MoveOutcome::Ignored(IgnoreReason::Occupied);
        }

        let dropped = self.entries.len() - (self.step + 1);
        self.entries.truncate(self.step + 1);
        self.entries.push(HistoryEntry {
            board: current.with(cell, self.to_move),
            position: Some(resolve(cell)),
        });
        self.step = self.entries.len() - 1;
        self.to_move = self.to_move.opponent();

        info!(step = self.step, dropped, next = %self.to_move, "Move applied");
        MoveOutcome::Applied
    }

    /// Shows the snapshot at `step`. The turn is recomputed from the step's
    /// parity (even: X), not read back from the recorded game.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no snapshot exists at `step`.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.entries.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.entries.len(),
            });
        }
        self.step = step;
        self.to_move = Mark::for_step(step);
        info!(step, next = %self.to_move, "Jumped");
        Ok(())
    }

    /// Flips the move-list order between ascending and descending.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Move list order toggled");
    }

    /// Winner, draw or next turn for the displayed snapshot.
    pub fn status(&self) -> Status {
        let board = self.current_board();
        match evaluate(board).winner() {
            Some(mark) => Status::Winner(mark),
            None if is_full(board) => Status::Draw,
            None => Status::NextTurn(self.to_move),
        }
    }

    /// Line check for the displayed snapshot.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current_board())
    }

    /// Every recorded snapshot, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The displayed snapshot.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.step]
    }

    /// Board of the displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.current_entry().board
    }

    /// Mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
