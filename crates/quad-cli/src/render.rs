//! ASCII rendering of a game.
//!
//! Each cell is right-aligned in three columns: `#` for inactive cells, `.` for empty
//! ones, and the layout token (`K1`, `P3`, ...) for pieces. Targets are
//! marked with `*`, or with `x` in front of the letter when they capture.

use chrono::Utc;
use quad_core::{Coord, Team};
use quad_engine::{Game, Square};
use std::fmt::Write;

/// Renders the board with column and row numbers.
pub fn render_board(game: &Game) -> String {
    render_with_marks(game, &[])
}

/// Renders the board with `targets` marked.
pub fn render_with_marks(game: &Game, targets: &[Coord]) -> String {
    let size = game.grid().size();
    let position = game.position();
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..size {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');

    for y in 0..size {
        let _ = write!(out, "{:>3}", y);
        for x in 0..size {
            let c = Coord::new(x, y);
            let marked = targets.contains(&c);
            let symbol = match position.square(c) {
                Square::Blocked => "#".to_string(),
                Square::Empty if marked => "*".to_string(),
                Square::Empty => ".".to_string(),
                Square::Occupied(p) if marked => format!("x{}", p.kind.to_letter()),
                Square::Occupied(p) => p.placement().token(),
            };
            let _ = write!(out, "{:>3}", symbol);
        }
        out.push('\n');
    }
    out
}

/// One line per wall, as grid corners.
pub fn render_walls(game: &Game) -> String {
    game.walls()
        .walls()
        .iter()
        .map(|w| format!("wall {} -> {}\n", w.start_cell, w.end_cell))
        .collect()
}

/// Turn, clock and piece counts.
pub fn render_status(game: &Game) -> String {
    let mut out = String::new();
    match game.winner_group() {
        Some(group) => {
            let _ = writeln!(out, "game over: {} wins", group);
        }
        None => {
            let _ = writeln!(out, "to move: {}", game.current_team());
        }
    }
    let _ = writeln!(out, "time: {}", game.clock().display(Utc::now()));
    for team in Team::ALL {
        let state = if game.turn().is_live(team) {
            "live"
        } else {
            "out"
        };
        let _ = writeln!(
            out,
            "{}: {} pieces, {} captures ({})",
            team,
            game.pieces().count_for_team(team),
            game.pieces().captured_by_team(team).len(),
            state
        );
    }
    out
}
