//! Move scripts.
//!
//! A script lists one move per line as `x,y x,y` (or `x,y->x,y`). Blank
//! lines and anything after `#` are ignored. Running a script drives the
//! engine through its selection, target and animation hooks and writes every
//! published event as one JSON line.

use quad_core::Move;
use quad_engine::{Game, InstantAnimator};
use std::io::Write;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("line {line}: cannot parse move '{text}'")]
    BadMove { line: usize, text: String },
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize event: {0}")]
    Json(#[from] serde_json::Error),
}

/// A move together with the script line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptMove {
    pub line: usize,
    pub mov: Move,
}

/// Counts of what happened while running a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub played: usize,
    pub rejected: usize,
    /// Moves left unplayed because the game ended first.
    pub skipped: usize,
}

/// Parses a whole script. Line numbers start at 1.
///
/// # Errors
///
/// Returns [`ScriptError::BadMove`] for the first line that is not a move.
pub fn parse_script(text: &str) -> Result<Vec<ScriptMove>, ScriptError> {
    let mut moves = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mov = Move::parse(line).ok_or_else(|| ScriptError::BadMove {
            line: index + 1,
            text: line.to_string(),
        })?;
        moves.push(ScriptMove {
            line: index + 1,
            mov,
        });
    }
    Ok(moves)
}

/// Plays one move to completion. Returns false if the engine refused it.
pub fn play_move(game: &mut Game, mov: Move) -> bool {
    let mut animator = InstantAnimator;
    let Some(id) = game.piece_at(mov.from).map(|p| p.id) else {
        return false;
    };
    if !game.select_piece(id) {
        return false;
    }
    if !game.choose_target(mov.to, &mut animator) {
        game.cancel_selection();
        return false;
    }
    while game.on_frame_tick(&mut animator) {}
    true
}

/// Runs `moves` against `game`, writing each event to `out` as JSON.
///
/// Refused moves are logged and counted; the run goes on with the next one.
///
/// # Errors
///
/// Fails only if writing to `out` fails.
pub fn run_script(
    game: &mut Game,
    moves: &[ScriptMove],
    out: &mut impl Write,
) -> Result<RunSummary, ScriptError> {
    let mut summary = RunSummary::default();
    for (index, step) in moves.iter().enumerate() {
        if game.is_game_over() {
            summary.skipped = moves.len() - index;
            break;
        }
        if play_move(game, step.mov) {
            debug!(line = step.line, mov = %step.mov, "move played");
            summary.played += 1;
        } else {
            warn!(
                line = step.line,
                mov = %step.mov,
                team = %game.current_team(),
                "move rejected"
            );
            summary.rejected += 1;
        }
        for event in game.drain_events() {
            serde_json::to_writer(&mut *out, &event)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(summary)
}
