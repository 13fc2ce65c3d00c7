//! Tic-tac-toe game engine.

use super::action::{EngineError, MoveError, NextTurn, StateChange};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameState, Outcome, Position, rules};
use tracing::{debug, info, instrument};

/// Owns the game state and is the only thing that changes it.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with a fresh game, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a snapshot of the current game state.
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended, and
    /// [`MoveError::CellOccupied`] if the square is taken. A rejected move
    /// leaves the state untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<StateChange, MoveError> {
        if self.state.status().is_terminal() {
            debug!(status = ?self.state.status(), "Move rejected, game is over");
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            debug!("Move rejected, square occupied");
            return Err(MoveError::CellOccupied(pos));
        }

        let mark = self.state.current_player();
        self.state.place(pos);
        info!(%pos, %mark, "Move accepted");

        // Win before draw: a ninth mark can complete a line.
        let next = match rules::check_winner(self.state.board()) {
            Some(winner) => self.finish(Outcome::Winner(winner)),
            None if rules::is_full(self.state.board()) => self.finish(Outcome::Draw),
            None => {
                self.state.flip_turn();
                NextTurn::Continue(self.state.current_player())
            }
        };

        self.debug_check_invariants();
        Ok(StateChange::new(pos, mark, next))
    }

    /// Index-based [`apply_move`](Self::apply_move) for callers holding raw
    /// 0-8 indices.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<StateChange, EngineError> {
        let pos = Position::try_from(index)?;
        Ok(self.apply_move(pos)?)
    }

    /// Starts over with an empty board and X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::new();
        info!("Game reset");
        self.current_state()
    }

    fn finish(&mut self, outcome: Outcome) -> NextTurn {
        self.state.set_status(outcome.into());
        info!(%outcome, "Game over");
        NextTurn::Finished(outcome)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TicTacToeInvariants::check_all(&self.state)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Invariant violation: {}", descriptions);
        }
    }
}
