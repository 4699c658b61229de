//! Team and color group representation.

use crate::Coord;
use serde::{Deserialize, Serialize};

/// One of the four players, seated around the board.
///
/// Teams 1 and 3 form the white color group, teams 2 and 4 the black one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Team {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

/// The two alliances formed by teams of equal parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorGroup {
    /// Odd teams (1 and 3).
    White,
    /// Even teams (2 and 4).
    Black,
}

impl Team {
    /// All teams in turn order.
    pub const ALL: [Team; 4] = [Team::One, Team::Two, Team::Three, Team::Four];

    /// Creates a team from its number (1-4).
    #[inline]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Team::One),
            2 => Some(Team::Two),
            3 => Some(Team::Three),
            4 => Some(Team::Four),
            _ => None,
        }
    }

    /// Creates a team from its layout digit ('1'-'4').
    #[inline]
    pub const fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Team::One),
            '2' => Some(Team::Two),
            '3' => Some(Team::Three),
            '4' => Some(Team::Four),
            _ => None,
        }
    }

    /// Returns the team number (1-4).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns a zero-based index (0-3) for per-team tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the layout digit for this team.
    #[inline]
    pub const fn to_digit(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Returns the following team in seating order, wrapping 4 -> 1.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::Three,
            Team::Three => Team::Four,
            Team::Four => Team::One,
        }
    }

    /// Returns the color group this team belongs to.
    #[inline]
    pub const fn group(self) -> ColorGroup {
        if self.number() % 2 == 1 {
            ColorGroup::White
        } else {
            ColorGroup::Black
        }
    }

    /// Returns true if `other` plays for the opposing color group.
    #[inline]
    pub const fn is_enemy_of(self, other: Team) -> bool {
        self.number() % 2 != other.number() % 2
    }

    /// Forward direction for this team's pawns.
    ///
    /// Team 1 advances +y, team 2 -x, team 3 -y, team 4 +x.
    #[inline]
    pub const fn pawn_direction(self) -> Coord {
        match self {
            Team::One => Coord::new(0, 1),
            Team::Two => Coord::new(-1, 0),
            Team::Three => Coord::new(0, -1),
            Team::Four => Coord::new(1, 0),
        }
    }

    /// Direction from this team's king towards its castling rook.
    #[inline]
    pub const fn castle_direction(self) -> Coord {
        match self {
            Team::One => Coord::new(-1, 0),
            Team::Two => Coord::new(0, -1),
            Team::Three => Coord::new(1, 0),
            Team::Four => Coord::new(0, 1),
        }
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> u8 {
        team.number()
    }
}

impl TryFrom<u8> for Team {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Team::from_number(n).ok_or_else(|| format!("team must be 1-4, got {}", n))
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "team {}", self.number())
    }
}

impl std::fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorGroup::White => write!(f, "White"),
            ColorGroup::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps() {
        assert_eq!(Team::One.next(), Team::Two);
        assert_eq!(Team::Four.next(), Team::One);
    }

    #[test]
    fn parity_groups() {
        assert_eq!(Team::One.group(), ColorGroup::White);
        assert_eq!(Team::Three.group(), ColorGroup::White);
        assert_eq!(Team::Two.group(), ColorGroup::Black);
        assert_eq!(Team::Four.group(), ColorGroup::Black);
    }

    #[test]
    fn enemies_differ_in_parity() {
        assert!(Team::One.is_enemy_of(Team::Two));
        assert!(Team::One.is_enemy_of(Team::Four));
        assert!(!Team::One.is_enemy_of(Team::Three));
        assert!(!Team::Two.is_enemy_of(Team::Four));
        assert!(!Team::Two.is_enemy_of(Team::Two));
    }

    #[test]
    fn pawn_directions() {
        assert_eq!(Team::One.pawn_direction(), Coord::new(0, 1));
        assert_eq!(Team::Two.pawn_direction(), Coord::new(-1, 0));
        assert_eq!(Team::Three.pawn_direction(), Coord::new(0, -1));
        assert_eq!(Team::Four.pawn_direction(), Coord::new(1, 0));
    }

    #[test]
    fn castle_direction_is_perpendicular_to_pawns() {
        for team in Team::ALL {
            let p = team.pawn_direction();
            let c = team.castle_direction();
            assert_eq!(p.x * c.x + p.y * c.y, 0, "{}", team);
        }
    }

    #[test]
    fn digits_roundtrip() {
        for team in Team::ALL {
            assert_eq!(Team::from_digit(team.to_digit()), Some(team));
        }
        assert_eq!(Team::from_digit('0'), None);
        assert_eq!(Team::from_digit('5'), None);
    }

    #[test]
    fn index_and_number() {
        assert_eq!(Team::One.index(), 0);
        assert_eq!(Team::Four.index(), 3);
        assert_eq!(Team::Three.number(), 3);
        assert!(Team::try_from(0u8).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Team::Two), "team 2");
        assert_eq!(format!("{}", ColorGroup::White), "White");
    }
}
