//! Sliding pieces: rook, bishop, queen.

use crate::piece::Piece;
use crate::position::{Position, Square};
use quad_core::Coord;

/// Walks each ray outward from the piece.
///
/// A ray stops before a cell that is off the board, inactive, allied, or
/// behind a wall (measured from the piece's own cell). An enemy cell ends the
/// ray and is included.
pub(super) fn slide(
    piece: &Piece,
    directions: &[Coord],
    position: &Position<'_>,
    targets: &mut Vec<Coord>,
) {
    let start = piece.cell;
    let max_steps = position.grid.size();

    for &dir in directions {
        for step in 1..max_steps {
            let next = start + dir * step;
            if position.crosses_wall(start, next) {
                break;
            }
            match position.square(next) {
                Square::Blocked => break,
                Square::Empty => targets.push(next),
                Square::Occupied(other) => {
                    if piece.is_enemy_of(other) {
                        targets.push(next);
                    }
                    break;
                }
            }
        }
    }
}
