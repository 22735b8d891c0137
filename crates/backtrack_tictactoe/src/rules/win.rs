//! Win detection logic for tic-tac-toe.

use crate::position::Cell;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells that win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Cell; 3]);

impl Line {
    const fn new(a: Cell, b: Cell, c: Cell) -> Self {
        Self([a, b, c])
    }

    /// The cells of this line.
    pub fn cells(&self) -> [Cell; 3] {
        self.0
    }

    /// Board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Cell::to_index)
    }

    /// Whether `cell` is part of this line.
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }
}

/// Every winning line, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new(Cell::TopLeft, Cell::TopCenter, Cell::TopRight),
    Line::new(Cell::MiddleLeft, Cell::Center, Cell::MiddleRight),
    Line::new(Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight),
    // Columns
    Line::new(Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft),
    Line::new(Cell::TopCenter, Cell::Center, Cell::BottomCenter),
    Line::new(Cell::TopRight, Cell::MiddleRight, Cell::BottomRight),
    // Diagonals
    Line::new(Cell::TopLeft, Cell::Center, Cell::BottomRight),
    Line::new(Cell::TopRight, Cell::Center, Cell::BottomLeft),
];

/// Outcome of checking a board for a completed line.
///
/// Winner and line are either both present or both absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    winner: Option<Mark>,
    line: Option<Line>,
}

impl Evaluation {
    fn won(mark: Mark, line: Line) -> Self {
        Self {
            winner: Some(mark),
            line: Some(line),
        }
    }

    /// The mark that completed a line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    /// True when a line is complete.
    pub fn is_won(&self) -> bool {
        self.winner.is_some()
    }
}

/// Checks every line in [`LINES`] order and reports the first one held by a
/// single mark.
#[instrument(level = "debug", skip(board), fields(occupied = board.occupied()))]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line.cells();
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq {
            if sq == board.get(b) && sq == board.get(c) {
                return Evaluation::won(mark, line);
            }
        }
    }

    Evaluation::default()
}

/// Returns the winning mark, `None` if no line is complete.
pub fn check_winner(board: &Board) -> Option<Mark> {
    evaluate(board).winner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_holder(board: &Board, line: &Line) -> Option<Mark> {
        let [a, b, c] = line.cells().map(|cell| board.get(cell));
        match a {
            Square::Occupied(mark) if a == b && b == c => Some(mark),
            _ => None,
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let eval = evaluate(&Board::new());
        assert_eq!(eval.winner(), None);
        assert_eq!(eval.line(), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Cell::TopLeft, Mark::X)
            .with(Cell::TopCenter, Mark::X)
            .with(Cell::TopRight, Mark::X);
        let eval = evaluate(&board);
        assert_eq!(eval.winner(), Some(Mark::X));
        assert_eq!(eval.line().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with(Cell::TopRight, Mark::O)
            .with(Cell::Center, Mark::O)
            .with(Cell::BottomLeft, Mark::O);
        let eval = evaluate(&board);
        assert_eq!(eval.winner(), Some(Mark::O));
        assert_eq!(eval.line().map(|l| l.indices()), Some([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with(Cell::TopLeft, Mark::X)
            .with(Cell::TopCenter, Mark::O)
            .with(Cell::TopRight, Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // Row 0 and column 0 both held by X: the row comes first.
        let board = Board::new()
            .with(Cell::TopLeft, Mark::X)
            .with(Cell::TopCenter, Mark::X)
            .with(Cell::TopRight, Mark::X)
            .with(Cell::MiddleLeft, Mark::X)
            .with(Cell::BottomLeft, Mark::X);
        assert_eq!(evaluate(&board).line(), Some(LINES[0]));
    }

    #[test]
    fn test_every_board_evaluates_consistently() {
        // All 3^9 assignments of empty/X/O.
        for code in 0..3usize.pow(9) {
            let mut squares = [Square::Empty; 9];
            let mut rest = code;
            for square in squares.iter_mut() {
                *square = match rest % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Mark::X),
                    _ => Square::Occupied(Mark::O),
                };
                rest /= 3;
            }
            let board = Board::from_squares(squares);
            let eval = evaluate(&board);
            let first = LINES
                .iter()
                .find_map(|line| line_holder(&board, line).map(|mark| (mark, *line)));

            match first {
                Some((mark, line)) => {
                    assert_eq!(eval.winner(), Some(mark));
                    assert_eq!(eval.line(), Some(line));
                }
                None => {
                    assert_eq!(eval.winner(), None);
                    assert_eq!(eval.line(), None);
                }
            }
        }
    }
}
