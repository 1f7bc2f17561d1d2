//! Tests for history navigation, forking and game outcomes.

use rewind_tictactoe::{
    Board, GameState, GameStatus, IgnoreReason, Move, PlayOutcome, Player, Position, Square,
};

fn play_all(state: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        let outcome = state.play_index(cell);
        assert!(outcome.is_placed(), "cell {} was {}", cell, outcome);
    }
}

#[test]
fn test_marks_alternate_by_history_position() {
    let mut state = GameState::new();
    play_all(&mut state, &[4, 0, 8, 2, 6]);

    let expected = [Player::X, Player::O, Player::X, Player::O, Player::X];
    for (step, player) in (1..state.len()).zip(expected) {
        assert_eq!(state.move_at(step).unwrap().player(), player);
    }
}

#[test]
fn test_second_click_on_same_square_changes_nothing() {
    let mut state = GameState::new();
    assert!(state.play_index(3).is_placed());
    let after_first = state.clone();

    assert_eq!(
        state.play_index(3),
        PlayOutcome::Ignored(IgnoreReason::SquareOccupied(Position::MiddleLeft))
    );
    assert_eq!(state, after_first);
    assert_eq!(state.len(), 2);
}

#[test]
fn test_jump_then_play_uses_parity_of_step() {
    let mut state = GameState::new();
    // X:0, O:1, X:2, O:3
    play_all(&mut state, &[0, 1, 2, 3]);
    assert_eq!(state.move_at(3).unwrap().player(), Player::X);

    state.jump_to(2);
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(
        state.play(Position::Center),
        PlayOutcome::Placed(Move::new(Player::X, Position::Center))
    );
    assert_eq!(state.current().get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_play_after_jump_discards_future() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 2, 3]);
    assert_eq!(state.len(), 5);
    let kept: Vec<Board> = state.history()[..3].to_vec();

    state.jump_to(2);
    assert_eq!(state.len(), 5, "jumping alone keeps the future");
    play_all(&mut state, &[8]);

    assert_eq!(state.len(), 4);
    assert_eq!(state.cursor(), 3);
    assert!(state.is_at_tip());
    assert_eq!(&state.history()[..3], kept.as_slice());
    assert_eq!(
        state.move_at(3),
        Some(Move::new(Player::X, Position::BottomRight))
    );
    // The discarded move at cell 2 is gone.
    assert!(state.current().is_empty(Position::TopRight));
}

#[test]
fn test_ignored_play_in_the_past_keeps_future() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 2]);
    state.jump_to(1);

    let outcome = state.play_index(0);
    assert_eq!(
        outcome,
        PlayOutcome::Ignored(IgnoreReason::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(state.len(), 4);
    assert_eq!(state.cursor(), 1);
}

#[test]
fn test_full_playthrough_x_wins_top_row() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 4, 1, 5, 2]);

    match state.status() {
        GameStatus::Won { winner, line } => {
            assert_eq!(winner, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("expected a win, got {:?}", other),
    }
    assert_eq!(state.winning_line().unwrap().indices(), [0, 1, 2]);
    assert_eq!(state.status().to_string(), "Winner: X");
}

#[test]
fn test_won_board_is_frozen() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 4, 1, 5, 2]);
    let won = state.clone();

    assert_eq!(
        state.play_index(8),
        PlayOutcome::Ignored(IgnoreReason::AlreadyWon(Player::X))
    );
    assert_eq!(state, won);
}

#[test]
fn test_browsing_a_won_game() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 4, 1, 5, 2]);

    state.jump_to(4);
    assert_eq!(state.status(), GameStatus::InProgress { next: Player::X });
    assert!(state.winning_line().is_none());

    state.jump_to(5);
    assert!(state.status().is_over());
}

#[test]
fn test_draw_then_extra_play_ignored() {
    let mut state = GameState::new();
    // X O X / X O O / O X X is reached by this order
    play_all(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.status().to_string(), "No more moves left");
    assert_eq!(state.len(), 10);

    for cell in 0..9 {
        assert!(!state.play_index(cell).is_placed());
    }
    assert_eq!(state.len(), 10);
}

#[test]
fn test_replay_matches_fresh_game() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 4, 1, 5, 2]);
    state.jump_to(2);

    state.replay();

    assert_eq!(state, GameState::new());
    assert_eq!(state.len(), 1);
    assert_eq!(state.cursor(), 0);
    assert_eq!(state.current(), &Board::new());
}

#[test]
fn test_state_serializes() {
    let mut state = GameState::new();
    play_all(&mut state, &[4]);

    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_deserialize_rejects_empty_history() {
    let err = serde_json::from_str::<GameState>(r#"{"history":[],"cursor":0}"#).unwrap_err();
    assert!(err.to_string().contains("at least the starting board"));
}

#[test]
fn test_deserialize_rejects_cursor_past_history() {
    let mut state = GameState::new();
    play_all(&mut state, &[4]);
    let mut json: serde_json::Value = serde_json::to_value(&state).unwrap();
    json["cursor"] = serde_json::json!(7);

    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("cursor 7 out of range"));
}
