//! Status consistency invariant: the recorded status matches the board.

use super::super::GameState;
use super::super::rules;
use super::Invariant;

/// Invariant: `status` is what the rules say about the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        rules::evaluate(state.board()) == state.status()
    }

    fn description() -> &'static str {
        "Status matches the evaluation of the board"
    }
}
