//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Apply a list of 0-based square indices and print the result
    Replay {
        /// Square indices (0-8, row-major) in move order
        indices: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
