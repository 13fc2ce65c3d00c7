//! Tests for the tic-tac-toe game engine.

use proptest::prelude::*;
use tictactoe_core::{
    Board, GameEngine, GameState, GameStatus, MoveError, NextTurn, Outcome, Player, Position,
    Square, rules,
};

fn play(engine: &mut GameEngine, indices: &[usize]) {
    for &index in indices {
        engine.apply_index(index).expect("Valid move");
    }
}

#[test]
fn test_new_engine_starts_with_x() {
    let engine = GameEngine::new();
    let state = engine.current_state();
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_top_row_win_for_x() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4]);
    assert_eq!(engine.state().status(), GameStatus::InProgress);

    let change = engine.apply_index(2).expect("Valid move");
    assert_eq!(*change.next(), NextTurn::Finished(Outcome::Winner(Player::X)));
    assert_eq!(engine.state().status(), GameStatus::Won(Player::X));
}

#[test]
fn test_listed_draw_board_evaluates_to_draw() {
    // X O X / O X O / O X O
    use Player::{O, X};
    let mut board = Board::new();
    for (pos, mark) in Position::ALL.into_iter().zip([X, O, X, O, X, O, O, X, O]) {
        board.set(pos, Square::Occupied(mark));
    }
    assert_eq!(rules::evaluate(&board), GameStatus::Draw);
}

#[test]
fn test_draw_on_ninth_move() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6]);
    assert_eq!(engine.state().status(), GameStatus::InProgress);

    let change = engine.apply_index(8).expect("Valid move");
    assert_eq!(change.outcome(), Some(Outcome::Draw));
    assert_eq!(engine.state().status(), GameStatus::Draw);
    assert_eq!(engine.state().board().display(), "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
}

#[test]
fn test_reset_after_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    let state = engine.reset();
    assert_eq!(state, GameState::new());
    assert_eq!(engine.current_state(), GameState::new());
}

#[test]
fn test_reset_after_draw_allows_play() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    engine.reset();

    let change = engine.apply_move(Position::Center).expect("Valid move after reset");
    assert_eq!(*change.mark(), Player::X);
}

#[test]
fn test_current_state_is_stable() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0]);
    assert_eq!(engine.current_state(), engine.current_state());
}

#[test]
fn test_state_serializes() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4]);
    let json = serde_json::to_string(&engine.current_state()).expect("serialize");
    let back: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, engine.current_state());
}

proptest! {
    #[test]
    fn prop_turn_parity(order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle()) {
        let mut engine = GameEngine::new();
        let mut accepted = 0usize;
        for index in order {
            let change = engine.apply_index(index).expect("empty square while in progress");
            accepted += 1;
            match *change.next() {
                NextTurn::Continue(next) => {
                    let expected = if accepted % 2 == 0 { Player::X } else { Player::O };
                    prop_assert_eq!(next, expected);
                    prop_assert_eq!(engine.state().current_player(), expected);
                }
                NextTurn::Finished(_) => break,
            }
        }
    }

    #[test]
    fn prop_occupied_move_changes_nothing(
        order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle(),
        played in 1..9usize,
        pick in 0..9usize,
    ) {
        let mut engine = GameEngine::new();
        for &index in &order[..played] {
            if engine.state().status().is_terminal() {
                break;
            }
            engine.apply_index(index).expect("empty square while in progress");
        }
        prop_assume!(!engine.state().status().is_terminal());

        let taken = engine.state().history()[pick % engine.state().history().len()];
        let before = engine.current_state();
        prop_assert_eq!(engine.apply_move(taken), Err(MoveError::CellOccupied(taken)));
        prop_assert_eq!(engine.current_state(), before);
    }

    #[test]
    fn prop_moves_after_game_over_rejected(
        order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle(),
        index in 0..9usize,
    ) {
        let mut engine = GameEngine::new();
        for i in order {
            if engine.state().status().is_terminal() {
                break;
            }
            engine.apply_index(i).expect("empty square while in progress");
        }
        // Every full shuffle ends the game, by win or draw.
        prop_assert!(engine.state().status().is_terminal());

        let before = engine.current_state();
        let pos = Position::from_index(index).expect("index in range");
        prop_assert_eq!(engine.apply_move(pos), Err(MoveError::GameOver));
        prop_assert_eq!(engine.current_state(), before);
    }
}
