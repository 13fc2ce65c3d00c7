//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They hold no state, so the engine and
//! the invariants evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the status a board implies.
///
/// A win is checked before a draw, so a full board with a completed line
/// is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
