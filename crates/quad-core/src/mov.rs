//! Move representation.

use crate::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A request to move whatever stands on `from` to `to`.
///
/// This carries no legality information; the engine decides whether the move
/// is acceptable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }

    /// Parses `"x,y x,y"` or `"x,y->x,y"`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (from, to) = match s.split_once("->") {
            Some(parts) => parts,
            None => s.split_once(char::is_whitespace)?,
        };
        Some(Move::new(Coord::parse(from)?, Coord::parse(to)?))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} -> {:?})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
