//! Terminal outcome of a game and the messages a view shows for it.

use super::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Headline of the end-of-game message.
    pub fn title(&self) -> String {
        match self {
            Outcome::Winner(player) => format!("Player {} Wins!", player),
            Outcome::Draw => "Game Draw!".to_string(),
        }
    }

    /// Secondary line of the end-of-game message.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Outcome::Winner(_) => "Congratulations!",
            Outcome::Draw => "It's a tie!",
        }
    }

    /// The outcome a status represents, `None` while the game runs.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
