//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Cell;
    use crate::types::Mark;

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (cell, ch) in Cell::ALL.iter().zip(marks.chars()) {
            match ch {
                'X' => board = board.with(*cell, Mark::X),
                'O' => board = board.with(*cell, Mark::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_from("....X....")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
