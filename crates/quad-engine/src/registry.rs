//! Bookkeeping of live and captured pieces.
//!
//! The registry owns every live [`Piece`] and indexes it by team. Captured
//! pieces move into [`CapturedRecord`]s, kept both in one global list and per
//! capturing team. A piece is always in exactly one of the two places.

use crate::piece::{Piece, PieceId};
use chrono::{DateTime, Utc};
use quad_core::{PieceKind, Placement, Team};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A captured piece, frozen at the moment of capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturedRecord {
    pub piece: Piece,
    pub captured_by: Team,
    pub captured_at: DateTime<Utc>,
}

impl CapturedRecord {
    pub fn kind(&self) -> PieceKind {
        self.piece.kind
    }

    /// The team the piece played for.
    pub fn team(&self) -> Team {
        self.piece.team
    }

    /// Time since capture as `MM:SS`, or `HH:MM:SS` past the hour.
    pub fn elapsed_display(&self, now: DateTime<Utc>) -> String {
        let seconds = (now - self.captured_at).num_seconds().max(0);
        let minutes = seconds / 60;
        let hours = minutes / 60;
        if hours > 0 {
            format!("{:02}:{:02}:{:02}", hours, minutes % 60, seconds % 60)
        } else {
            format!("{:02}:{:02}", minutes, seconds % 60)
        }
    }
}

impl fmt::Display for CapturedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of team {} (captured by team {})",
            self.piece.kind,
            self.piece.team.number(),
            self.captured_by.number()
        )
    }
}

/// Indexed storage of pieces.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    next_id: u32,
    pieces: BTreeMap<PieceId, Piece>,
    order: Vec<PieceId>,
    by_team: [Vec<PieceId>; 4],
    captured: Vec<CapturedRecord>,
    captured_by_team: [Vec<CapturedRecord>; 4],
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a piece from a placement and registers it. The grid is not
    /// touched.
    pub fn spawn(&mut self, placement: Placement) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.add(Piece::from_placement(id, placement));
        id
    }

    /// Registers a live piece. Ignored if the id is already live.
    pub fn add(&mut self, piece: Piece) {
        if self.pieces.contains_key(&piece.id) {
            return;
        }
        self.next_id = self.next_id.max(piece.id.0 + 1);
        self.order.push(piece.id);
        self.by_team[piece.team.index()].push(piece.id);
        self.pieces.insert(piece.id, piece);
    }

    /// Unregisters a live piece without recording a capture.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        self.order.retain(|&p| p != id);
        self.by_team[piece.team.index()].retain(|&p| p != id);
        Some(piece)
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.contains_key(&id)
    }

    /// All live pieces in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.order.iter().filter_map(|id| self.pieces.get(id))
    }

    /// Live pieces of one team in registration order.
    pub fn team(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.by_team[team.index()]
            .iter()
            .filter_map(|id| self.pieces.get(id))
    }

    pub fn pieces_of_kind(&self, kind: PieceKind) -> Vec<&Piece> {
        self.all().filter(|p| p.kind == kind).collect()
    }

    pub fn pieces_of_team_and_kind(&self, team: Team, kind: PieceKind) -> Vec<&Piece> {
        self.team(team).filter(|p| p.kind == kind).collect()
    }

    pub fn count_for_team(&self, team: Team) -> usize {
        self.by_team[team.index()].len()
    }

    pub fn count_for_team_and_kind(&self, team: Team, kind: PieceKind) -> usize {
        self.team(team).filter(|p| p.kind == kind).count()
    }

    pub fn live_count(&self) -> usize {
        self.pieces.len()
    }

    /// Live plus captured pieces.
    pub fn total_count(&self) -> usize {
        self.pieces.len() + self.captured.len()
    }

    /// Moves a live piece into the captured lists.
    pub fn add_captured(
        &mut self,
        id: PieceId,
        captured_by: Team,
        captured_at: DateTime<Utc>,
    ) -> Option<CapturedRecord> {
        let piece = self.remove(id)?;
        let record = CapturedRecord {
            piece,
            captured_by,
            captured_at,
        };
        self.captured.push(record.clone());
        self.captured_by_team[captured_by.index()].push(record.clone());
        Some(record)
    }

    /// Every capture, oldest first.
    pub fn captured(&self) -> &[CapturedRecord] {
        &self.captured
    }

    /// Captures made by `team`, oldest first.
    pub fn captured_by_team(&self, team: Team) -> &[CapturedRecord] {
        &self.captured_by_team[team.index()]
    }

    pub fn captured_by_team_and_kind(&self, team: Team, kind: PieceKind) -> Vec<&CapturedRecord> {
        self.captured_by_team(team)
            .iter()
            .filter(|r| r.kind() == kind)
            .collect()
    }

    pub fn last_captured_by(&self, team: Team) -> Option<&CapturedRecord> {
        self.captured_by_team(team).last()
    }

    /// Brings a captured piece back to the live indices. The grid is not
    /// touched; callers put the piece back on its cell.
    pub fn restore(&mut self, id: PieceId) -> Option<&Piece> {
        let index = self.captured.iter().position(|r| r.piece.id == id)?;
        let record = self.captured.remove(index);
        self.captured_by_team[record.captured_by.index()].retain(|r| r.piece.id != id);
        self.add(record.piece);
        self.pieces.get(&id)
    }

    /// Drops a team's live pieces and the captures that team made. Returns
    /// the pieces that were live.
    pub fn clear_for_team(&mut self, team: Team) -> Vec<Piece> {
        let ids = std::mem::take(&mut self.by_team[team.index()]);
        self.order.retain(|id| !ids.contains(id));
        let removed = ids
            .iter()
            .filter_map(|id| self.pieces.remove(id))
            .collect();

        let dropped = std::mem::take(&mut self.captured_by_team[team.index()]);
        self.captured
            .retain(|r| !dropped.iter().any(|d| d.piece.id == r.piece.id));

        removed
    }

    /// Forgets everything, including the id counter.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}
