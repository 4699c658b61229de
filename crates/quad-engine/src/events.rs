//! Notifications published by a running game.
//!
//! The game pushes events onto an internal queue; hosts drain it after each
//! call into the engine and react (draw, animate, log, serialize).

use crate::piece::{Piece, PieceId};
use quad_core::{ColorGroup, Coord, Team};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A piece was picked and these are its targets.
    Selected {
        piece: PieceId,
        targets: Vec<Coord>,
    },
    /// A piece left `from` for `to`. The grid already shows it on `to`.
    MoveStarted {
        piece: PieceId,
        from: Coord,
        to: Coord,
    },
    MoveEnded {
        piece: PieceId,
        at: Coord,
    },
    /// A piece left the board. `piece` is its state at removal.
    FigureCaptured {
        piece: Piece,
        by: Team,
    },
    TeamEliminated {
        team: Team,
        by: Team,
    },
    TurnChanged {
        team: Team,
    },
    GameOver {
        context_team: Team,
        winner: ColorGroup,
    },
    Paused,
    Resumed,
    Restarted,
}
