//! Line-oriented terminal view and the interactive game loop.

use crate::input::{Input, parse_input};
use std::io::{self, BufRead, Write};
use tictactoe_core::{
    Board, GameState, Outcome, Player, Position, Session, Square, View, status_line,
};
use tracing::{info, instrument};

/// Draws the game as text on a writer.
///
/// Terminals can't repaint a single square, so filled squares are kept
/// locally and the board is printed with each status update.
#[derive(Debug)]
pub struct TerminalView<W> {
    out: W,
    board: Board,
    error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            board: Board::new(),
            error: None,
        }
    }

    /// Prints a one-line note that doesn't change the game.
    pub fn note(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text);
        self.record(result);
    }

    /// Returns the first write error since the last call, if any.
    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Consumes the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result
            && self.error.is_none()
        {
            self.error = Some(e);
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render_square(&mut self, position: Position, mark: Player) {
        self.board.set(position, Square::Occupied(mark));
    }

    fn render_status(&mut self, state: &GameState) {
        let result = writeln!(self.out, "\n{}\n\n{}", self.board.display(), status_line(state))
            .and_then(|()| self.out.flush());
        self.record(result);
    }

    fn show_message(&mut self, outcome: &Outcome) {
        let title = outcome.title();
        let subtitle = outcome.subtitle();
        let width = title.len().max(subtitle.len()) + 4;
        let rule = "*".repeat(width);
        let inner = width - 4;
        let result = writeln!(self.out, "\n{rule}")
            .and_then(|()| writeln!(self.out, "* {title:^inner$} *"))
            .and_then(|()| writeln!(self.out, "* {subtitle:^inner$} *"))
            .and_then(|()| writeln!(self.out, "{rule}"))
            .and_then(|()| writeln!(self.out, "Press Enter to play again, q to quit."))
            .and_then(|()| self.out.flush());
        self.record(result);
    }

    fn hide_message(&mut self) {}

    fn render_board(&mut self, board: &Board) {
        self.board = board.clone();
    }
}

/// Runs an interactive game until `q` or end of input.
#[instrument(skip(input, output))]
pub fn run_play<R: BufRead, W: Write>(input: R, output: W) -> anyhow::Result<W> {
    let mut session = Session::new(TerminalView::new(output));
    session
        .view_mut()
        .note("Squares are numbered 1-9. r restarts, q quits.");
    session.view_mut().take_error()?;

    for line in input.lines() {
        let line = line?;
        match parse_input(&line, session.message_shown()) {
            Ok(Input::Select(position)) => {
                if let Err(e) = session.select(position) {
                    session.view_mut().note(&e.to_string());
                }
            }
            Ok(Input::Restart) => session.restart(),
            Ok(Input::Dismiss) => session.dismiss_message(),
            Ok(Input::Quit) => break,
            Ok(Input::Nothing) => {}
            Err(e) => session.view_mut().note(&e.to_string()),
        }
        session.view_mut().take_error()?;
    }

    info!("Leaving game");
    Ok(session.into_view().into_inner())
}
