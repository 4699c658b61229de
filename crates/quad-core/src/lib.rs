//! Core types for four-team chess.
//!
//! This crate provides the fundamental types shared by the engine and its
//! hosts:
//! - [`Team`] and [`ColorGroup`] for the four players and their alliances
//! - [`PieceKind`] for piece representation
//! - [`Coord`] and the step tables for board coordinates
//! - [`Move`] for move requests
//! - Board layout text parsing and serialization

mod coord;
mod layout;
mod mov;
mod piece;
mod team;

pub use coord::{Coord, DIAGONAL, KING_STEPS, KNIGHT_JUMPS, ORTHOGONAL};
pub use layout::{LayoutError, LayoutIssue, LayoutParser, ParsedLayout, Placement, EMPTY_TOKEN};
pub use mov::Move;
pub use piece::PieceKind;
pub use team::{ColorGroup, Team};
