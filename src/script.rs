//! Headless play: feed a list of columns through the engine and report each
//! resolved move as plain text.

use std::io::{self, Write};

use tracing::warn;

use crate::config::PlayersConfig;
use crate::game::{DropOutcome, GameState, GameStatus};

/// Play `columns` in order on a fresh game, writing one line per move and the
/// final board to `out`. Rejected moves are reported and skipped.
pub fn play_script<W: Write>(
    columns: &[usize],
    players: &PlayersConfig,
    out: &mut W,
) -> io::Result<GameState> {
    let mut state = GameState::new();

    for (turn, &column) in columns.iter().enumerate() {
        let mover = players.label(state.current_player());
        match state.drop_piece(column) {
            Ok(outcome) => {
                let (row, col) = outcome.cell();
                write!(out, "{:>3}. {mover} -> ({row}, {col})", turn + 1)?;
                match outcome {
                    DropOutcome::Continue { next_player, .. } => {
                        writeln!(out, ", {} to move", players.label(next_player))?
                    }
                    DropOutcome::Won { winner, .. } => {
                        writeln!(out, ", {} won!", players.label(winner))?
                    }
                    DropOutcome::Tied { .. } => writeln!(out, ", it's a tie!")?,
                }
            }
            Err(err) => {
                warn!(column, %err, "scripted move rejected");
                writeln!(out, "{:>3}. {mover} -> column {column} rejected: {err}", turn + 1)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", state.board())?;
    let summary = match state.status() {
        GameStatus::InProgress => format!(
            "In progress, {} to move",
            players.label(state.current_player())
        ),
        GameStatus::Won(winner) => format!("{} won!", players.label(winner)),
        GameStatus::Tied => "It's a tie!".to_string(),
    };
    writeln!(out, "{summary}")?;

    Ok(state)
}
