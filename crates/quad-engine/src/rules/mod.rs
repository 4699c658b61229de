//! Move generation for every piece kind.
//!
//! [`legal_targets`] is the single entry point: it dispatches on the piece
//! kind and returns the cells the piece may move to. Generation only reads
//! the [`Position`]; it never mutates the board.
//!
//! Legality here is local: a move is offered if the piece can physically make
//! it. There is no notion of check, so kings may walk into attacks and are
//! simply captured.

mod castle;
mod pawn;
mod slide;
mod step;

#[cfg(test)]
pub(crate) mod fixture;

pub use castle::{castling_partner, castling_target, CastlingPartner};

use crate::piece::Piece;
use crate::position::Position;
use quad_core::{Coord, PieceKind, DIAGONAL, KING_STEPS, KNIGHT_JUMPS, ORTHOGONAL};

/// Returns every cell `piece` may move to.
///
/// Every returned cell is active and not held by a piece of the mover's color
/// group. The order follows the direction tables and carries no meaning.
pub fn legal_targets(piece: &Piece, position: &Position<'_>) -> Vec<Coord> {
    let mut targets = Vec::new();
    match piece.kind {
        PieceKind::Rook => slide::slide(piece, &ORTHOGONAL, position, &mut targets),
        PieceKind::Bishop => slide::slide(piece, &DIAGONAL, position, &mut targets),
        PieceKind::Queen => slide::slide(piece, &KING_STEPS, position, &mut targets),
        PieceKind::Knight => step::jumps(piece, &KNIGHT_JUMPS, position, &mut targets),
        PieceKind::King => {
            step::steps(piece, &KING_STEPS, position, &mut targets);
            if let Some(target) = castling_target(piece, position) {
                targets.push(target);
            }
        }
        PieceKind::Pawn => pawn::pawn(piece, position, &mut targets),
    }
    targets
}
