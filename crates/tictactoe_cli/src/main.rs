//! tictactoe - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, Command, run_play, run_replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!(command = ?cli.command(), "Starting tictactoe");

    match cli.command() {
        Command::Play => {
            run_play(io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Replay { indices, json } => {
            run_replay(&indices, json, io::stdout().lock())?;
        }
    }

    Ok(())
}
