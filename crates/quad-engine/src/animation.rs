//! The animation collaborator.
//!
//! The engine never draws. When a piece starts moving it asks an
//! [`Animator`] to show the motion, then waits for the host to report that
//! the motion finished (see [`Game::on_animation_complete`] and
//! [`Game::on_frame_tick`]).
//!
//! [`Game::on_animation_complete`]: crate::Game::on_animation_complete
//! [`Game::on_frame_tick`]: crate::Game::on_frame_tick

use crate::piece::PieceId;
use quad_core::Coord;

pub trait Animator {
    /// Starts moving `piece` from `from` to `to`.
    fn animate(&mut self, piece: PieceId, from: Coord, to: Coord);

    /// Returns true while `piece` is still on its way.
    fn is_animating(&self, piece: PieceId) -> bool;
}

/// Animator for headless hosts: every motion finishes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantAnimator;

impl Animator for InstantAnimator {
    fn animate(&mut self, _piece: PieceId, _from: Coord, _to: Coord) {}

    fn is_animating(&self, _piece: PieceId) -> bool {
        false
    }
}

/// Records requests and keeps each motion running for a number of frames.
///
/// Useful to drive a game frame by frame, e.g. from tests or a terminal UI.
#[derive(Debug, Clone, Default)]
pub struct FrameAnimator {
    frames_per_move: u32,
    running: Vec<(PieceId, u32)>,
    requests: Vec<(PieceId, Coord, Coord)>,
}

impl FrameAnimator {
    pub fn new(frames_per_move: u32) -> Self {
        FrameAnimator {
            frames_per_move,
            ..Self::default()
        }
    }

    /// Advances every running motion by one frame.
    pub fn tick(&mut self) {
        for (_, left) in &mut self.running {
            *left = left.saturating_sub(1);
        }
        self.running.retain(|&(_, left)| left > 0);
    }

    /// Every motion requested so far, oldest first.
    pub fn requests(&self) -> &[(PieceId, Coord, Coord)] {
        &self.requests
    }
}

impl Animator for FrameAnimator {
    fn animate(&mut self, piece: PieceId, from: Coord, to: Coord) {
        self.requests.push((piece, from, to));
        self.running.retain(|&(p, _)| p != piece);
        if self.frames_per_move > 0 {
            self.running.push((piece, self.frames_per_move));
        }
    }

    fn is_animating(&self, piece: PieceId) -> bool {
        self.running.iter().any(|&(p, _)| p == piece)
    }
}
