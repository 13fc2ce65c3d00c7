//! Terminal front end for tictactoe_core.
//!
//! - **cli**: argument parsing
//! - **input**: interactive command parsing
//! - **terminal**: the text [`View`](tictactoe_core::View) and game loop
//! - **replay**: scripted games

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod replay;
mod terminal;

pub use cli::{Cli, Command};
pub use input::{Input, InputError, parse_input};
pub use replay::run_replay;
pub use terminal::{TerminalView, run_play};
