//! Tic-tac-toe game logic.
//!
//! The [`GameEngine`] owns a [`GameState`], validates moves, and detects
//! wins and draws. Front ends implement [`View`] and let a [`Session`]
//! translate their input into engine calls.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_index(index)?;
//! }
//! assert_eq!(engine.state().status(), GameStatus::Won(Player::X));
//! # Ok::<(), tictactoe_core::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{EngineError, MoveError, NextTurn, StateChange};
pub use engine::GameEngine;
pub use outcome::Outcome;
pub use position::{Position, PositionError};
pub use types::{Board, GameState, GameStatus, Player, Square};
pub use view::{Session, View, status_line};
