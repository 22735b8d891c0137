//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use backtrack_tictactoe::{Cell, GameHistory, MoveOutcome};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The move list.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    cursor: Cell,
    focus: Focus,
    selected_step: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(sort_ascending: bool) -> Self {
        Self {
            game: GameHistory::with_ascending(sort_ascending),
            cursor: Cell::Center,
            focus: Focus::Board,
            selected_step: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Feedback from the last rejected action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                self.selected_step = self.game.step();
            }
            KeyCode::Char('s') => self.game.toggle_order(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(cell) = digit_cell(c) {
                    self.cursor = cell;
                    self.place(cell);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        // Steps in the order the list shows them.
        let shown: Vec<usize> = if self.game.is_ascending() {
            (0..self.game.history().len()).collect()
        } else {
            (0..self.game.history().len()).rev().collect()
        };
        let row = shown
            .iter()
            .position(|step| *step == self.selected_step)
            .unwrap_or(0);

        match code {
            KeyCode::Up => self.selected_step = shown[row.saturating_sub(1)],
            KeyCode::Down => self.selected_step = shown[(row + 1).min(shown.len() - 1)],
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(e) = self.game.jump_to(self.selected_step) {
                    warn!(error = %e, "Jump failed");
                    self.message = Some(e.to_string());
                }
            }
            _ => {}
        }
    }

    fn place(&mut self, cell: Cell) {
        match self.game.place(cell) {
            MoveOutcome::Applied => self.selected_step = self.game.step(),
            MoveOutcome::Ignored(reason) => self.message = Some(format!("{}: {}", cell, reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backtrack_tictactoe::{Mark, Square, Status};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.game().current_board().get(Cell::TopLeft),
            Square::Occupied(Mark::X)
        );
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_digits_place_directly() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.game().step(), 2);
        assert_eq!(app.cursor(), Cell::Center);
        assert_eq!(
            app.game().current_board().get(Cell::Center),
            Square::Occupied(Mark::O)
        );
    }

    #[test]
    fn test_occupied_cell_sets_message() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.message(), Some("Center: cell already occupied"));
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_jump_through_move_list() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected_step(), 3);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().status(), Status::NextTurn(Mark::O));
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_list_navigation_follows_descending_order() {
        let mut app = App::new(false);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.game().step(), 1);

        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.game().step(), 0);
    }

    #[test]
    fn test_toggle_and_quit() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('s')]);
        assert!(!app.game().is_ascending());
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
