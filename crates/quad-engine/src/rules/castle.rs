//! Castling.
//!
//! Two independent computations are involved. [`castling_target`] offers the
//! cell two steps along the team's castle direction when the rook sits three
//! steps away. [`castling_partner`] runs after the king has landed and looks
//! for the rook one step beyond the king, then sends it two steps back along
//! the castle direction. Neither consults walls.

use crate::piece::{Piece, PieceId};
use crate::position::Position;
use quad_core::{Coord, PieceKind};

/// The rook that follows a castling king, and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPartner {
    pub rook: PieceId,
    pub from: Coord,
    pub to: Coord,
}

fn unmoved_rook_of<'a>(king: &Piece, position: &Position<'a>, at: Coord) -> Option<&'a Piece> {
    position
        .piece_at(at)
        .filter(|p| p.kind == PieceKind::Rook && p.team == king.team && p.first_move)
}

/// The castling destination for an unmoved king, if castling is open.
pub fn castling_target(king: &Piece, position: &Position<'_>) -> Option<Coord> {
    if king.kind != PieceKind::King || !king.first_move {
        return None;
    }
    let hide = king.team.castle_direction();
    let beside = king.cell + hide;
    let target = king.cell + hide * 2;
    if !position.is_free(beside) || !position.is_free(target) {
        return None;
    }
    unmoved_rook_of(king, position, king.cell + hide * 3).map(|_| target)
}

/// Looks for a rook that should follow `king`, which has just completed a
/// move and still carries its first-move flag.
///
/// The rook must stand one step past the king along the castle direction and
/// be unmoved. Its destination must be active and empty.
pub fn castling_partner(king: &Piece, position: &Position<'_>) -> Option<CastlingPartner> {
    if king.kind != PieceKind::King || !king.first_move {
        return None;
    }
    let hide = king.team.castle_direction();
    let from = king.cell + hide;
    let rook = unmoved_rook_of(king, position, from)?;
    let to = from + (-hide) * 2;
    if !position.is_free(to) {
        return None;
    }
    Some(CastlingPartner {
        rook: rook.id,
        from,
        to,
    })
}

#[cfg(test)]
mod tests {
    use super::super::fixture::Fixture;
    use super::*;
    use quad_core::Team;

    /// Team one's back line corner: king on (7, 2), rook on (4, 2).
    fn back_line(fx: &mut Fixture) -> (PieceId, PieceId) {
        let k = fx.place(PieceKind::King, Team::One, 7, 2);
        let r = fx.place(PieceKind::Rook, Team::One, 4, 2);
        (k, r)
    }

    #[test]
    fn castling_offered_with_clear_path() {
        let mut fx = Fixture::walled();
        let (k, _) = back_line(&mut fx);
        assert!(fx.targets(k).contains(&Coord::new(5, 2)));
        let king = fx.pieces.get(k).unwrap();
        assert_eq!(castling_target(king, &fx.position()), Some(Coord::new(5, 2)));
    }

    #[test]
    fn castling_refused_when_path_occupied() {
        let mut fx = Fixture::open();
        let (k, _) = back_line(&mut fx);
        let n = fx.place(PieceKind::Knight, Team::One, 5, 2);
        let king = fx.pieces.get(k).unwrap();
        assert_eq!(castling_target(king, &fx.position()), None);

        fx.grid.clear_occupant(Coord::new(5, 2));
        fx.pieces.remove(n);
        fx.place(PieceKind::Knight, Team::Two, 6, 2);
        let king = fx.pieces.get(k).unwrap();
        assert_eq!(castling_target(king, &fx.position()), None);
    }

    #[test]
    fn castling_needs_unmoved_king_and_rook() {
        let mut fx = Fixture::open();
        let (k, r) = back_line(&mut fx);
        fx.pieces.get_mut(r).unwrap().first_move = false;
        assert!(!fx.targets(k).contains(&Coord::new(5, 2)));

        fx.pieces.get_mut(r).unwrap().first_move = true;
        fx.pieces.get_mut(k).unwrap().first_move = false;
        assert!(!fx.targets(k).contains(&Coord::new(5, 2)));
    }

    #[test]
    fn castling_needs_own_rook() {
        let mut fx = Fixture::open();
        fx.place(PieceKind::King, Team::One, 7, 2);
        fx.place(PieceKind::Rook, Team::Three, 4, 2);
        let king = fx.pieces.team(Team::One).next().unwrap();
        assert_eq!(castling_target(king, &fx.position()), None);
    }

    #[test]
    fn castle_directions_follow_team() {
        let mut fx = Fixture::open();
        let k3 = fx.place(PieceKind::King, Team::Three, 8, 13);
        fx.place(PieceKind::Rook, Team::Three, 11, 13);
        let k2 = fx.place(PieceKind::King, Team::Two, 13, 7);
        fx.place(PieceKind::Rook, Team::Two, 13, 4);
        let k4 = fx.place(PieceKind::King, Team::Four, 2, 8);
        fx.place(PieceKind::Rook, Team::Four, 2, 11);
        assert!(fx.targets(k3).contains(&Coord::new(10, 13)));
        assert!(fx.targets(k2).contains(&Coord::new(13, 5)));
        assert!(fx.targets(k4).contains(&Coord::new(2, 10)));
    }

    #[test]
    fn partner_found_after_king_lands() {
        let mut fx = Fixture::open();
        let (k, r) = back_line(&mut fx);
        fx.grid.clear_occupant(Coord::new(7, 2));
        fx.grid.set_occupant(Coord::new(5, 2), k);
        fx.pieces.get_mut(k).unwrap().cell = Coord::new(5, 2);

        let king = fx.pieces.get(k).unwrap();
        assert_eq!(
            castling_partner(king, &fx.position()),
            Some(CastlingPartner {
                rook: r,
                from: Coord::new(4, 2),
                to: Coord::new(6, 2),
            })
        );
    }

    #[test]
    fn no_partner_when_relocation_square_taken() {
        let mut fx = Fixture::open();
        let k = fx.place(PieceKind::King, Team::One, 5, 2);
        fx.place(PieceKind::Rook, Team::One, 4, 2);
        fx.place(PieceKind::Bishop, Team::Two, 6, 2);
        let king = fx.pieces.get(k).unwrap();
        assert_eq!(castling_partner(king, &fx.position()), None);
    }

    #[test]
    fn walls_next_to_castling_path_are_ignored() {
        // A wall between the king and its first step gates the plain step but
        // leaves castling untouched, as does one between destination and rook.
        let mut fx = Fixture::open();
        fx.walls.add_wall(Coord::new(7, 0), Coord::new(7, 4));
        fx.walls.add_wall(Coord::new(5, 0), Coord::new(5, 4));
        let (k, r) = back_line(&mut fx);

        let targets = fx.targets(k);
        assert!(!targets.contains(&Coord::new(6, 2)));
        assert!(targets.contains(&Coord::new(5, 2)));

        fx.grid.clear_occupant(Coord::new(7, 2));
        fx.grid.set_occupant(Coord::new(5, 2), k);
        fx.pieces.get_mut(k).unwrap().cell = Coord::new(5, 2);
        let king = fx.pieces.get(k).unwrap();
        let partner = castling_partner(king, &fx.position()).unwrap();
        assert_eq!(partner.rook, r);
        assert_eq!(partner.to, Coord::new(6, 2));
    }
}
