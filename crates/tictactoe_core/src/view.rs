//! The seam between the engine and whatever draws the game.
//!
//! A [`View`] renders; a [`Session`] owns the engine and the view, turns
//! user input into engine calls, and pushes the results back out.

use super::{Board, GameEngine, GameState, MoveError, Outcome, Player, Position, StateChange};
use tracing::{debug, instrument};

/// Rendering side of a front end.
pub trait View {
    /// A square was filled with `mark`.
    fn render_square(&mut self, position: Position, mark: Player);

    /// Refresh the turn/status line from `state`.
    fn render_status(&mut self, state: &GameState);

    /// Show the end-of-game message.
    fn show_message(&mut self, outcome: &Outcome);

    /// Hide the end-of-game message, if shown.
    fn hide_message(&mut self);

    /// Redraw the whole board.
    fn render_board(&mut self, board: &Board);
}

/// Status line text for a state.
///
/// Shows whose turn it is while the game runs, the outcome afterwards.
pub fn status_line(state: &GameState) -> String {
    match Outcome::from_status(state.status()) {
        None => format!("It's {}'s turn", state.current_player()),
        Some(outcome) => outcome.title(),
    }
}

/// Drives a [`GameEngine`] from user input and keeps a [`View`] in sync.
#[derive(Debug)]
pub struct Session<V> {
    engine: GameEngine,
    view: V,
    message_shown: bool,
}

impl<V: View> Session<V> {
    /// Creates a session and draws the initial board.
    #[instrument(skip(view))]
    pub fn new(view: V) -> Self {
        let mut session = Self {
            engine: GameEngine::new(),
            view,
            message_shown: false,
        };
        session.redraw();
        session
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Whether the end-of-game message is showing.
    pub fn message_shown(&self) -> bool {
        self.message_shown
    }

    /// Handles a click on `position`.
    ///
    /// Rejected moves are ignored: nothing is re-rendered and the error is
    /// only logged.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) -> Result<StateChange, MoveError> {
        let change = self.engine.apply_move(position).inspect_err(|e| {
            debug!(error = %e, "Ignoring move");
        })?;

        self.view.render_square(*change.position(), *change.mark());
        self.view.render_status(self.engine.state());
        if let Some(outcome) = change.outcome() {
            self.view.show_message(&outcome);
            self.message_shown = true;
        }
        Ok(change)
    }

    /// Starts a new game and redraws everything.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.engine.reset();
        self.redraw();
        self.view.hide_message();
        self.message_shown = false;
    }

    /// Closes the end-of-game message, which also starts a new game.
    #[instrument(skip(self))]
    pub fn dismiss_message(&mut self) {
        self.restart();
    }

    /// Consumes the session, returning the view.
    pub fn into_view(self) -> V {
        self.view
    }

    fn redraw(&mut self) {
        self.view.render_board(self.engine.state().board());
        self.view.render_status(self.engine.state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call as a short string.
    #[derive(Debug, Default)]
    struct RecordingView {
        calls: Vec<String>,
    }

    impl View for RecordingView {
        fn render_square(&mut self, position: Position, mark: Player) {
            self.calls.push(format!("square {} {}", position.to_index(), mark));
        }

        fn render_status(&mut self, state: &GameState) {
            self.calls.push(format!("status {}", status_line(state)));
        }

        fn show_message(&mut self, outcome: &Outcome) {
            self.calls.push(format!("message {}", outcome.title()));
        }

        fn hide_message(&mut self) {
            self.calls.push("hide".to_string());
        }

        fn render_board(&mut self, _board: &Board) {
            self.calls.push("board".to_string());
        }
    }

    fn click(session: &mut Session<RecordingView>, index: usize) {
        let pos = Position::from_index(index).expect("index in range");
        let _ = session.select(pos);
    }

    #[test]
    fn test_new_session_draws_board_and_status() {
        let session = Session::new(RecordingView::default());
        assert_eq!(session.view().calls, vec!["board", "status It's X's turn"]);
    }

    #[test]
    fn test_accepted_move_renders_square_then_status() {
        let mut session = Session::new(RecordingView::default());
        session.view_mut().calls.clear();

        click(&mut session, 4);
        assert_eq!(
            session.view().calls,
            vec!["square 4 X", "status It's O's turn"]
        );
    }

    #[test]
    fn test_rejected_move_renders_nothing() {
        let mut session = Session::new(RecordingView::default());
        click(&mut session, 4);
        session.view_mut().calls.clear();

        let result = session.select(Position::Center);
        assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
        assert!(session.view().calls.is_empty());
    }

    #[test]
    fn test_win_shows_message() {
        let mut session = Session::new(RecordingView::default());
        for index in [0, 3, 1, 4, 2] {
            click(&mut session, index);
        }
        assert!(session.message_shown());
        assert_eq!(
            session.view().calls.last().map(String::as_str),
            Some("message Player X Wins!")
        );
    }

    #[test]
    fn test_dismiss_message_restarts() {
        let mut session = Session::new(RecordingView::default());
        for index in [0, 3, 1, 4, 2] {
            click(&mut session, index);
        }
        session.view_mut().calls.clear();

        session.dismiss_message();
        assert!(!session.message_shown());
        assert_eq!(session.engine().current_state(), GameState::new());
        assert_eq!(
            session.view().calls,
            vec!["board", "status It's X's turn", "hide"]
        );
    }
}
