//! Read-only view of the board used by move generation.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::registry::Registry;
use crate::walls::WallSet;
use quad_core::Coord;

/// What a rule sees when it looks at a cell.
#[derive(Debug, Clone, Copy)]
pub enum Square<'a> {
    /// Off the grid or inactive.
    Blocked,
    Empty,
    Occupied(&'a Piece),
}

/// Borrowed grid, walls and pieces of one game.
#[derive(Debug, Clone, Copy)]
pub struct Position<'a> {
    pub grid: &'a Grid,
    pub walls: &'a WallSet,
    pub pieces: &'a Registry,
}

impl<'a> Position<'a> {
    pub fn new(grid: &'a Grid, walls: &'a WallSet, pieces: &'a Registry) -> Self {
        Position {
            grid,
            walls,
            pieces,
        }
    }

    /// Classifies the cell at `c`.
    pub fn square(&self, c: Coord) -> Square<'a> {
        match self.grid.cell(c) {
            Some(cell) if cell.is_active() => match cell.occupant() {
                Some(id) => self
                    .pieces
                    .get(id)
                    .map_or(Square::Empty, Square::Occupied),
                None => Square::Empty,
            },
            _ => Square::Blocked,
        }
    }

    pub fn piece_at(&self, c: Coord) -> Option<&'a Piece> {
        match self.square(c) {
            Square::Occupied(p) => Some(p),
            _ => None,
        }
    }

    /// Active and unoccupied.
    pub fn is_free(&self, c: Coord) -> bool {
        matches!(self.square(c), Square::Empty)
    }

    pub fn crosses_wall(&self, from: Coord, to: Coord) -> bool {
        self.walls.crosses_wall(from, to)
    }
}
