//! Pawns.
//!
//! Each team pushes its pawns along its own axis (see
//! [`Team::pawn_direction`](quad_core::Team::pawn_direction)). Pawns never
//! promote.

use crate::piece::Piece;
use crate::position::{Position, Square};
use quad_core::Coord;

/// Forward pushes and diagonal captures.
pub(super) fn pawn(piece: &Piece, position: &Position<'_>, targets: &mut Vec<Coord>) {
    let forward = piece.team.pawn_direction();

    let one = piece.cell + forward;
    if position.is_free(one) {
        targets.push(one);
        let two = one + forward;
        if piece.first_move && position.is_free(two) {
            targets.push(two);
        }
    }

    for capture in capture_offsets(forward) {
        let to = piece.cell + capture;
        if position.crosses_wall(piece.cell, to) {
            continue;
        }
        if let Square::Occupied(other) = position.square(to) {
            if piece.is_enemy_of(other) {
                targets.push(to);
            }
        }
    }
}

/// The two forward diagonals, one step to either side of the push axis.
fn capture_offsets(forward: Coord) -> [Coord; 2] {
    if forward.x == 0 {
        [Coord::new(-1, forward.y), Coord::new(1, forward.y)]
    } else {
        [Coord::new(forward.x, -1), Coord::new(forward.x, 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{set, Fixture};
    use super::*;
    use quad_core::{PieceKind, Team};

    #[test]
    fn lone_pawn_double_step_then_single() {
        let mut fx = Fixture::open();
        let p = fx.place(PieceKind::Pawn, Team::One, 8, 10);
        assert_eq!(fx.targets(p), set(&[(8, 11), (8, 12)]));

        fx.pieces.get_mut(p).unwrap().first_move = false;
        assert_eq!(fx.targets(p), set(&[(8, 11)]));
    }

    #[test]
    fn each_team_pushes_its_own_way() {
        let mut fx = Fixture::open();
        let two = fx.place(PieceKind::Pawn, Team::Two, 12, 8);
        let three = fx.place(PieceKind::Pawn, Team::Three, 8, 12);
        let four = fx.place(PieceKind::Pawn, Team::Four, 3, 6);
        assert_eq!(fx.targets(two), set(&[(11, 8), (10, 8)]));
        assert_eq!(fx.targets(three), set(&[(8, 11), (8, 10)]));
        assert_eq!(fx.targets(four), set(&[(4, 6), (5, 6)]));
    }

    #[test]
    fn blocked_push_blocks_double_step() {
        let mut fx = Fixture::open();
        let p = fx.place(PieceKind::Pawn, Team::One, 8, 3);
        fx.place(PieceKind::Rook, Team::Two, 8, 4);
        assert!(fx.targets(p).is_empty());
    }

    #[test]
    fn double_step_needs_free_destination() {
        let mut fx = Fixture::open();
        let p = fx.place(PieceKind::Pawn, Team::One, 8, 3);
        fx.place(PieceKind::Rook, Team::Two, 8, 5);
        assert_eq!(fx.targets(p), set(&[(8, 4)]));
    }

    #[test]
    fn pawn_never_pushes_off_the_board() {
        let mut fx = Fixture::open();
        let p = fx.place(PieceKind::Pawn, Team::One, 8, 13);
        assert!(fx.targets(p).is_empty());
    }

    #[test]
    fn captures_only_enemies_on_diagonals() {
        let mut fx = Fixture::open();
        let p = fx.place(PieceKind::Pawn, Team::One, 8, 8);
        fx.place(PieceKind::Knight, Team::Two, 7, 9);
        fx.place(PieceKind::Knight, Team::Three, 9, 9);
        fx.pieces.get_mut(p).unwrap().first_move = false;
        assert_eq!(fx.targets(p), set(&[(8, 9), (7, 9)]));
    }

    #[test]
    fn sideways_team_captures_along_y() {
        let mut fx = Fixture::open();
        let p = fx.place(PieceKind::Pawn, Team::Two, 8, 8);
        fx.place(PieceKind::Bishop, Team::One, 7, 7);
        fx.place(PieceKind::Bishop, Team::Three, 7, 9);
        fx.place(PieceKind::Bishop, Team::One, 9, 9);
        let targets = fx.targets(p);
        assert!(targets.contains(&Coord::new(7, 7)));
        assert!(targets.contains(&Coord::new(7, 9)));
        assert!(!targets.contains(&Coord::new(9, 9)));
    }

    #[test]
    fn pawn_does_not_capture_forward() {
        let mut fx = Fixture::open();
        let p = fx.place(PieceKind::Pawn, Team::Four, 8, 8);
        fx.place(PieceKind::Pawn, Team::One, 9, 8);
        assert!(fx.targets(p).is_empty());
    }

    #[test]
    fn diagonal_capture_through_wall_is_refused() {
        let mut fx = Fixture::walled();
        let p = fx.place(PieceKind::Pawn, Team::One, 2, 3);
        fx.place(PieceKind::Pawn, Team::Two, 3, 4);
        // The push to (2, 4) crosses the same wall but forward moves ignore it.
        assert_eq!(fx.targets(p), set(&[(2, 4), (2, 5)]));
    }
}
