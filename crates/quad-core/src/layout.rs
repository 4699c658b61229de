//! Board layout text parsing and serialization.
//!
//! A layout is plain text. Line `y` describes row `y` of the board; its
//! whitespace-separated tokens describe columns `0, 1, 2, ...`. Each token is
//! either `00` (empty) or a piece letter followed by a team digit, e.g. `K1`
//! or `P3`. Only the first `size` lines and `size` tokens per line are read.

use crate::{Coord, PieceKind, Team};
use std::path::Path;
use thiserror::Error;

/// Token used for an empty cell.
pub const EMPTY_TOKEN: &str = "00";

/// Errors that abort reading a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout file: {0}")]
    Read(#[from] std::io::Error),
}

/// A recoverable problem with a single token. The cell stays empty.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutIssue {
    #[error("unknown piece code '{token}' at {at}")]
    UnknownCode { at: Coord, token: String },

    #[error("invalid team digit in '{token}' at {at}")]
    InvalidTeam { at: Coord, token: String },

    #[error("{kind} of {team} placed on inactive cell {at}")]
    InactiveCell { at: Coord, kind: PieceKind, team: Team },

    #[error("{kind} of {team} placed on occupied cell {at}")]
    OccupiedCell { at: Coord, kind: PieceKind, team: Team },
}

/// A piece to be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: PieceKind,
    pub team: Team,
    pub at: Coord,
}

impl Placement {
    pub const fn new(kind: PieceKind, team: Team, at: Coord) -> Self {
        Placement { kind, team, at }
    }

    /// Returns the two-character layout token for this piece.
    pub fn token(&self) -> String {
        format!("{}{}", self.kind.to_letter(), self.team.to_digit())
    }
}

/// The outcome of parsing a layout: everything that could be placed, plus the
/// tokens that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLayout {
    pub placements: Vec<Placement>,
    pub issues: Vec<LayoutIssue>,
}

impl ParsedLayout {
    /// Returns true if every token was understood.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parser for layout text.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParser {
    size: usize,
}

impl LayoutParser {
    /// Creates a parser for a `size` x `size` board.
    pub const fn new(size: usize) -> Self {
        LayoutParser { size }
    }

    /// Parses layout text. Never fails: malformed tokens are reported as
    /// issues and short lines leave their remaining columns empty.
    pub fn parse(&self, text: &str) -> ParsedLayout {
        let mut parsed = ParsedLayout::default();

        for (row, line) in text.lines().take(self.size).enumerate() {
            for (col, token) in line.split_whitespace().take(self.size).enumerate() {
                let at = Coord::new(col as i32, row as i32);
                match Self::parse_token(token, at) {
                    Ok(Some(placement)) => parsed.placements.push(placement),
                    Ok(None) => {}
                    Err(issue) => parsed.issues.push(issue),
                }
            }
        }

        parsed
    }

    /// Reads and parses a layout file.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Read`] if the file cannot be read.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<ParsedLayout, LayoutError> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.parse(&text))
    }

    fn parse_token(token: &str, at: Coord) -> Result<Option<Placement>, LayoutIssue> {
        if token == EMPTY_TOKEN {
            return Ok(None);
        }

        let mut chars = token.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(LayoutIssue::UnknownCode {
                at,
                token: token.to_string(),
            });
        };

        let kind = PieceKind::from_letter(letter).ok_or_else(|| LayoutIssue::UnknownCode {
            at,
            token: token.to_string(),
        })?;
        let team = Team::from_digit(digit).ok_or_else(|| LayoutIssue::InvalidTeam {
            at,
            token: token.to_string(),
        })?;

        Ok(Some(Placement::new(kind, team, at)))
    }

    /// Renders placements back into layout text: `size` lines of `size`
    /// tokens each. Placements outside the board are ignored.
    pub fn to_text(&self, placements: &[Placement]) -> String {
        let mut rows = vec![vec![EMPTY_TOKEN.to_string(); self.size]; self.size];
        for p in placements {
            if p.at.x < 0 || p.at.y < 0 {
                continue;
            }
            if let Some(cell) = rows
                .get_mut(p.at.y as usize)
                .and_then(|row| row.get_mut(p.at.x as usize))
            {
                *cell = p.token();
            }
        }

        let mut out = String::new();
        for row in rows {
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}
