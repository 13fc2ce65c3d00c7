//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// X has either as many marks as O or one more. While the game runs, X is
/// to move exactly when the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        if state.status().is_terminal() {
            return true;
        }

        let expected_next = if x_count == o_count {
            Player::X
        } else {
            Player::O
        };
        state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
