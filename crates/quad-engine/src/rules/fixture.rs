//! Small boards for rule tests.

use crate::config::BoardConfig;
use crate::grid::Grid;
use crate::piece::PieceId;
use crate::position::Position;
use crate::registry::Registry;
use crate::walls::WallSet;
use quad_core::{Coord, PieceKind, Placement, Team};
use std::collections::BTreeSet;

pub(crate) struct Fixture {
    pub grid: Grid,
    pub walls: WallSet,
    pub pieces: Registry,
}

impl Fixture {
    /// Standard 16x16 board with no walls.
    pub fn open() -> Self {
        let config = BoardConfig::default();
        Fixture {
            grid: Grid::from_config(&config),
            walls: WallSet::new(config.geometry()),
            pieces: Registry::new(),
        }
    }

    /// Standard 16x16 board with the standard walls.
    pub fn walled() -> Self {
        let config = BoardConfig::default();
        Fixture {
            grid: Grid::from_config(&config),
            walls: WallSet::from_specs(&config.wall_specs(), config.size, config.geometry()),
            pieces: Registry::new(),
        }
    }

    pub fn place(&mut self, kind: PieceKind, team: Team, x: i32, y: i32) -> PieceId {
        let at = Coord::new(x, y);
        let id = self.pieces.spawn(Placement::new(kind, team, at));
        assert!(self.grid.set_occupant(at, id), "cannot place on {:?}", at);
        id
    }

    pub fn position(&self) -> Position<'_> {
        Position::new(&self.grid, &self.walls, &self.pieces)
    }

    pub fn targets(&self, id: PieceId) -> BTreeSet<Coord> {
        let piece = self.pieces.get(id).expect("piece exists");
        super::legal_targets(piece, &self.position())
            .into_iter()
            .collect()
    }
}

pub(crate) fn set(coords: &[(i32, i32)]) -> BTreeSet<Coord> {
    coords.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}
