//! Move results and move errors.

use super::{Outcome, Player, Position, PositionError};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// What happens after an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NextTurn {
    /// The game goes on with this player to move.
    Continue(Player),
    /// The move ended the game.
    Finished(Outcome),
}

/// Description of an accepted move, for the view to re-render from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct StateChange {
    /// Square that was filled.
    position: Position,
    /// Mark placed there.
    mark: Player,
    /// Next player, or the outcome if the game ended.
    next: NextTurn,
}

impl StateChange {
    /// Returns the outcome if this move ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.next {
            NextTurn::Finished(outcome) => Some(outcome),
            NextTurn::Continue(_) => None,
        }
    }
}

/// A rejected move. Callers ignore these; the state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error from index-based moves.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum EngineError {
    /// The index does not name a square.
    #[display("{}", _0)]
    Position(PositionError),
    /// The move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Position(e) => Some(e),
            EngineError::Move(e) => Some(e),
        }
    }
}
