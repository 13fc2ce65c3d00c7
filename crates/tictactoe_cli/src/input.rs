//! Parsing of interactive commands.

use derive_more::{Display, Error};
use tictactoe_core::Position;
use tracing::instrument;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Select(Position),
    /// Start a new game.
    Restart,
    /// Close the end-of-game message.
    Dismiss,
    /// Leave.
    Quit,
    /// Blank line with nothing to dismiss.
    Nothing,
}

/// Input that isn't a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Square numbers run from 1 to 9.
    #[display("No square numbered {}, pick 1-9", _0)]
    SquareNumber(#[error(not(source))] usize),

    /// Neither a number, a position label, nor a command.
    #[display("Unrecognised input {:?}, try 1-9, a position like \"center\", r or q", _0)]
    Unrecognised(#[error(not(source))] String),
}

/// Parses a line. An empty line dismisses the message when one is showing.
#[instrument]
pub fn parse_input(line: &str, message_shown: bool) -> Result<Input, InputError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" if message_shown => return Ok(Input::Dismiss),
        "" => return Ok(Input::Nothing),
        "r" | "reset" | "restart" => return Ok(Input::Restart),
        "q" | "quit" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(Position::from_index)
            .map(Input::Select)
            .ok_or(InputError::SquareNumber(number));
    }

    Position::from_label(trimmed)
        .map(Input::Select)
        .map_err(|_| InputError::Unrecognised(trimmed.to_string()))
}
