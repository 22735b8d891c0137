//! Board cells and their row/column coordinates.
//!
//! A [`Cell`] names one of the nine squares. The resolver maps a cell to the
//! 1-based [`Coordinate`] shown in the move list.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Converts the cell to its board index (0-8).
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a cell from a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 1-based (row, column) coordinate of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("(column: {column} row: {row})")]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Row in 1..=3, counted from the top.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column in 1..=3, counted from the left.
    pub fn column(&self) -> u8 {
        self.column
    }
}

/// Resolves a cell to its 1-based row and column.
#[instrument(level = "trace")]
pub fn resolve(cell: Cell) -> Coordinate {
    let index = cell.to_index() as u8;
    Coordinate {
        row: index / 3 + 1,
        column: index % 3 + 1,
    }
}

/// Resolves a raw board index. Indices past 8 have no coordinate.
#[instrument(level = "trace")]
pub fn resolve_index(index: usize) -> Option<Coordinate> {
    Cell::from_index(index).map(resolve)
}
