//! Live pieces.

use quad_core::{Coord, PieceKind, Placement, Team};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a piece within one game session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board.
///
/// `cell` mirrors the grid: whenever the grid records this piece as the
/// occupant of a cell, `cell` names that cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub team: Team,
    pub cell: Coord,
    /// True until the piece completes its first move.
    pub first_move: bool,
    pub selected: bool,
    pub moving: bool,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, team: Team, cell: Coord) -> Self {
        Piece {
            id,
            kind,
            team,
            cell,
            first_move: true,
            selected: false,
            moving: false,
        }
    }

    pub fn from_placement(id: PieceId, placement: Placement) -> Self {
        Self::new(id, placement.kind, placement.team, placement.at)
    }

    /// Returns true if `other` belongs to the opposing color group.
    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.team.is_enemy_of(other.team)
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.kind, self.team, self.cell)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} at {}", self.kind, self.team, self.cell)
    }
}
