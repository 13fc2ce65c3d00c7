//! Non-interactive replay of a move list.

use std::io::Write;
use tictactoe_core::{GameEngine, GameState, Outcome, status_line};
use tracing::{instrument, warn};

/// Applies `indices` in order and writes the final state to `out`.
///
/// Rejected moves are logged and skipped, the way a view ignores invalid
/// clicks.
#[instrument(skip(out))]
pub fn run_replay<W: Write>(
    indices: &[usize],
    json: bool,
    mut out: W,
) -> anyhow::Result<GameState> {
    let mut engine = GameEngine::new();
    for &index in indices {
        if let Err(e) = engine.apply_index(index) {
            warn!(index, error = %e, "Skipping move");
        }
    }

    let state = engine.current_state();
    if json {
        serde_json::to_writer_pretty(&mut out, &state)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}\n\n{}", state.board().display(), status_line(&state))?;
        if let Some(outcome) = Outcome::from_status(state.status()) {
            writeln!(out, "{}", outcome.subtitle())?;
        }
    }
    out.flush()?;
    Ok(state)
}
