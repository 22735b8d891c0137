//! Scenario tests for the move history.

use backtrack_tictactoe::{
    Board, Cell, GameHistory, IgnoreReason, Mark, MoveOutcome, Square, Status,
};

fn play(indices: &[usize]) -> GameHistory {
    let mut game = GameHistory::new();
    for &index in indices {
        assert_eq!(game.apply_move(index), Ok(MoveOutcome::Applied));
    }
    game
}

#[test]
fn test_row_win_scenario() {
    let mut game = GameHistory::new();

    game.apply_move(0).unwrap();
    assert_eq!(game.current_board().get(Cell::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(game.to_move(), Mark::O);

    game.apply_move(4).unwrap();
    assert_eq!(game.current_board().get(Cell::Center), Square::Occupied(Mark::O));
    assert_eq!(game.to_move(), Mark::X);

    game.apply_move(1).unwrap();
    game.apply_move(3).unwrap();
    game.apply_move(2).unwrap();

    assert_eq!(game.status(), Status::Winner(Mark::X));
    assert_eq!(game.status().to_string(), "winner: X");
    assert_eq!(game.evaluation().line().map(|l| l.indices()), Some([0, 1, 2]));

    let before = game.clone();
    assert_eq!(
        game.apply_move(8),
        Ok(MoveOutcome::Ignored(IgnoreReason::GameWon))
    );
    assert_eq!(game, before);
}

#[test]
fn test_jump_to_start_from_any_step() {
    for len in 1..=5 {
        let mut game = play(&[0, 4, 1, 3, 2][..len]);
        game.jump_to(0).unwrap();
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.status().to_string(), "next turn: X");
        assert_eq!(game.history().len(), len + 1);
    }
}

#[test]
fn test_branch_on_edit_discards_future() {
    let mut game = play(&[0, 4, 8]);
    let s0 = *game.history()[0].board();
    let s1 = *game.history()[1].board();

    game.jump_to(1).unwrap();
    assert_eq!(game.apply_move(2), Ok(MoveOutcome::Applied));

    let boards: Vec<Board> = game.history().iter().map(|e| *e.board()).collect();
    assert_eq!(boards.len(), 3);
    assert_eq!(boards[0], s0);
    assert_eq!(boards[1], s1);
    assert_eq!(boards[2], s1.with(Cell::TopRight, Mark::O));
    assert_eq!(game.step(), 2);
    assert_eq!(game.to_move(), Mark::X);
}

#[test]
fn test_ignored_move_after_jump_keeps_future() {
    let mut game = play(&[0, 4, 8]);
    game.jump_to(1).unwrap();
    assert_eq!(
        game.apply_move(0),
        Ok(MoveOutcome::Ignored(IgnoreReason::Occupied))
    );
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 1);
}

#[test]
fn test_jump_out_of_won_position_reopens_play() {
    let mut game = play(&[0, 4, 1, 3, 2]);
    game.jump_to(4).unwrap();
    assert_eq!(game.status(), Status::NextTurn(Mark::X));
    assert_eq!(game.apply_move(5), Ok(MoveOutcome::Applied));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), Status::NextTurn(Mark::O));
}

#[test]
fn test_turn_follows_step_parity_after_jump() {
    let mut game = play(&[0, 4, 8, 2]);
    for step in 0..game.history().len() {
        game.jump_to(step).unwrap();
        let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.to_move(), expected);
    }
}

#[test]
fn test_view_state_serializes() {
    let game = play(&[4]);
    let json = serde_json::to_value(game.view_state()).unwrap();
    assert_eq!(json["status"], "next turn: O");
    assert_eq!(json["sort_ascending"], false);
    assert_eq!(json["history_list"][0]["label"], "Go to move #1 | (column: 2 row: 2)");
    assert_eq!(json["history_list"][0]["is_current"], true);
    assert_eq!(json["history_list"][1]["label"], "Go to start of game");
}
