//! Key-to-cell mapping for keyboard navigation.

use backtrack_tictactoe::Cell;
use crossterm::event::KeyCode;

/// Moves the board cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };

    Cell::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Cell for a number key, `1` being top-left and `9` bottom-right.
pub fn digit_cell(c: char) -> Option<Cell> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Cell::from_index(digit as usize - 1),
        _ => None,
    }
}
