//! Fixed-offset pieces: knight and king.

use crate::piece::Piece;
use crate::position::{Position, Square};
use quad_core::Coord;

/// Pushes `to` if it is free or holds an enemy.
#[inline]
fn push_if_open(piece: &Piece, to: Coord, position: &Position<'_>, targets: &mut Vec<Coord>) {
    match position.square(to) {
        Square::Empty => targets.push(to),
        Square::Occupied(other) if piece.is_enemy_of(other) => targets.push(to),
        _ => {}
    }
}

/// Knight jumps. Walls never stop a knight.
pub(super) fn jumps(
    piece: &Piece,
    offsets: &[Coord],
    position: &Position<'_>,
    targets: &mut Vec<Coord>,
) {
    for &offset in offsets {
        push_if_open(piece, piece.cell + offset, position, targets);
    }
}

/// Single steps that may not pass through a wall.
pub(super) fn steps(
    piece: &Piece,
    offsets: &[Coord],
    position: &Position<'_>,
    targets: &mut Vec<Coord>,
) {
    for &offset in offsets {
        let to = piece.cell + offset;
        if position.crosses_wall(piece.cell, to) {
            continue;
        }
        push_if_open(piece, to, position, targets);
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{set, Fixture};
    use quad_core::{Coord, PieceKind, Team};

    #[test]
    fn knight_in_open_board() {
        let mut fx = Fixture::open();
        let n = fx.place(PieceKind::Knight, Team::One, 8, 8);
        assert_eq!(
            fx.targets(n),
            set(&[
                (9, 10),
                (10, 9),
                (10, 7),
                (9, 6),
                (7, 6),
                (6, 7),
                (6, 9),
                (7, 10)
            ])
        );
    }

    #[test]
    fn knight_skips_inactive_and_allies_but_takes_enemies() {
        let mut fx = Fixture::open();
        let n = fx.place(PieceKind::Knight, Team::Two, 4, 2);
        fx.place(PieceKind::Pawn, Team::Four, 6, 3);
        fx.place(PieceKind::Pawn, Team::Three, 5, 4);
        // (5, 0) and (6, 1) lie in the inactive border; (3, 0) and (2, 1)
        // are inside the fortress corner.
        assert_eq!(
            fx.targets(n),
            set(&[(5, 4), (3, 4), (2, 3), (2, 1), (3, 0)])
        );
    }

    #[test]
    fn knight_jumps_over_walls() {
        let mut fx = Fixture::walled();
        let n = fx.place(PieceKind::Knight, Team::One, 2, 3);
        let targets = fx.targets(n);
        assert!(targets.contains(&Coord::new(3, 5)));
        assert!(targets.contains(&Coord::new(4, 4)));
        assert!(fx.walls.crosses_wall(Coord::new(2, 3), Coord::new(4, 4)));
    }

    #[test]
    fn king_steps_everywhere_in_open_board() {
        let mut fx = Fixture::open();
        let k = fx.place(PieceKind::King, Team::Three, 8, 8);
        // Moved kings never castle.
        fx.pieces.get_mut(k).unwrap().first_move = false;
        assert_eq!(fx.targets(k).len(), 8);
    }

    #[test]
    fn king_steps_are_stopped_by_walls() {
        let mut fx = Fixture::walled();
        let k = fx.place(PieceKind::King, Team::One, 2, 3);
        fx.pieces.get_mut(k).unwrap().first_move = false;
        let targets = fx.targets(k);
        assert!(!targets.contains(&Coord::new(2, 4)));
        assert!(!targets.contains(&Coord::new(1, 4)));
        assert!(!targets.contains(&Coord::new(3, 4)));
        assert!(targets.contains(&Coord::new(3, 2)));
        assert!(targets.contains(&Coord::new(1, 3)));
    }
}
