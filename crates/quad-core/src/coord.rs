//! Board coordinate representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A grid coordinate: `x` is the column, `y` the row (top to bottom).
///
/// Coordinates are signed so that rule generation can step off the edge of
/// the board and simply get "no cell" back.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Parses `"x,y"` (surrounding whitespace and parentheses are ignored).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = s.split_once(',')?;
        Some(Coord::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
    }

    /// Chebyshev distance to `other`.
    #[inline]
    pub fn distance(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Rook directions.
pub const ORTHOGONAL: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: -1 },
];

/// Bishop directions.
pub const DIAGONAL: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

/// The 8 unit steps around a cell, also the queen's ray directions.
pub const KING_STEPS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: 1, y: 1 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: 0 },
    Coord { x: -1, y: -1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: -1 },
];

/// The 8 knight jumps.
pub const KNIGHT_JUMPS: [Coord; 8] = [
    Coord { x: 2, y: 1 },
    Coord { x: 2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -2, y: -1 },
    Coord { x: 1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: -1, y: -2 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arithmetic() {
        let a = Coord::new(3, 4);
        let b = Coord::new(-1, 2);
        assert_eq!(a + b, Coord::new(2, 6));
        assert_eq!(a - b, Coord::new(4, 2));
        assert_eq!(-b, Coord::new(1, -2));
        assert_eq!(b * 3, Coord::new(-3, 6));
    }

    #[test]
    fn parse() {
        assert_eq!(Coord::parse("8,10"), Some(Coord::new(8, 10)));
        assert_eq!(Coord::parse(" (3, 4) "), Some(Coord::new(3, 4)));
        assert_eq!(Coord::parse("-1,0"), Some(Coord::new(-1, 0)));
        assert_eq!(Coord::parse("8"), None);
        assert_eq!(Coord::parse("a,b"), None);
    }

    proptest! {
        #[test]
        fn display_parse_roundtrip(x in any::<i32>(), y in any::<i32>()) {
            let c = Coord::new(x, y);
            prop_assert_eq!(Coord::parse(&c.to_string()), Some(c));
        }
    }

    #[test]
    fn distance() {
        assert_eq!(Coord::new(0, 0).distance(Coord::new(2, 1)), 2);
        assert_eq!(Coord::new(5, 5).distance(Coord::new(5, 5)), 0);
    }

    #[test]
    fn step_tables_are_unique() {
        for table in [&KING_STEPS[..], &KNIGHT_JUMPS[..]] {
            for (i, a) in table.iter().enumerate() {
                assert!(!table[i + 1..].contains(a));
            }
        }
        assert!(ORTHOGONAL.iter().chain(DIAGONAL.iter()).all(|d| KING_STEPS.contains(d)));
    }
}
