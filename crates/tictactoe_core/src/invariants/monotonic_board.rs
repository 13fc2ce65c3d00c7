//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Player, Square};
use super::Invariant;

/// Invariant: the board is exactly the history replayed from X.
///
/// Every history entry targets a square that was still empty, so no
/// mark was ever overwritten or removed.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut mark = Player::X;

        for &pos in state.history() {
            if !reconstructed.is_empty(pos) {
                return false;
            }
            reconstructed.set(pos, Square::Occupied(mark));
            mark = mark.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
