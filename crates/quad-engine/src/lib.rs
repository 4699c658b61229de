//! Rules engine for four-team chess on a walled board.
//!
//! This crate provides:
//! - [`Grid`] - the cell matrix with its inactive border and fortress corners
//! - [`WallSet`] - wall segments that block sliding pieces and king steps
//! - [`legal_targets`] - move generation for every piece kind, castling included
//! - [`Registry`] - live pieces by team and kind, plus the capture history
//! - [`Game`] - one game session: turn order, captures, elimination and victory
//!
//! # Architecture
//!
//! Four teams play on a 16x16 grid. Teams 1 and 3 form one color group, 2 and
//! 4 the other; pieces of the same group never capture each other. Capturing
//! a king eliminates its team, and the game ends once two teams are out and
//! every survivor belongs to the same group.
//!
//! The engine is headless. Hosts feed it selections and targets, animate
//! moves through an [`Animator`] and report back when an animation finishes.
//! Everything that happens is published as a [`GameEvent`].
//!
//! # Example
//!
//! ```
//! use quad_engine::{Game, InstantAnimator};
//! use quad_core::{Coord, Team};
//!
//! let mut game = Game::standard();
//! let pawn = game.piece_at(Coord::new(8, 3)).unwrap().id;
//! let mut animator = InstantAnimator;
//!
//! assert!(game.select_piece(pawn));
//! assert!(game.choose_target(Coord::new(8, 5), &mut animator));
//! game.on_animation_complete(pawn, &mut animator);
//! assert_eq!(game.current_team(), Team::Two);
//! ```

mod animation;
mod clock;
mod config;
mod events;
mod game;
mod geometry;
mod grid;
mod piece;
mod position;
mod registry;
pub mod rules;
mod turn;
mod walls;

pub use animation::{Animator, FrameAnimator, InstantAnimator};
pub use clock::SessionClock;
pub use config::{BoardConfig, ConfigError, WallSpec, MAX_BOARD_SIZE, MAX_CELL_SIZE};
pub use events::GameEvent;
pub use game::{Game, LoadReport, MoveInFlight, Phase, STANDARD_LAYOUT};
pub use geometry::{BoardGeometry, Point};
pub use grid::{Cell, Grid};
pub use piece::{Piece, PieceId};
pub use position::{Position, Square};
pub use registry::{CapturedRecord, Registry};
pub use rules::{legal_targets, CastlingPartner};
pub use turn::TurnState;
pub use walls::{segments_intersect, Wall, WallSet};
