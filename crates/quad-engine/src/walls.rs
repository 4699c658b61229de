//! Interior walls.
//!
//! Walls are line segments laid along cell edges. A move is occluded when the
//! segment joining the centers of its start and end cells touches any wall.

use crate::config::WallSpec;
use crate::geometry::{BoardGeometry, Point};
use quad_core::Coord;
use tracing::warn;

/// A wall between two grid corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub start_cell: Coord,
    pub end_cell: Coord,
    pub start_pos: Point,
    pub end_pos: Point,
}

impl Wall {
    pub fn new(start_cell: Coord, end_cell: Coord, geometry: &BoardGeometry) -> Self {
        Wall {
            start_cell,
            end_cell,
            start_pos: geometry.cell_origin(start_cell),
            end_pos: geometry.cell_origin(end_cell),
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.start_cell.x == self.end_cell.x
    }

    pub fn is_horizontal(&self) -> bool {
        self.start_cell.y == self.end_cell.y
    }
}

/// The set of walls on a board.
#[derive(Debug, Clone)]
pub struct WallSet {
    walls: Vec<Wall>,
    geometry: BoardGeometry,
}

impl WallSet {
    /// Creates an empty wall set.
    pub fn new(geometry: BoardGeometry) -> Self {
        WallSet {
            walls: Vec::new(),
            geometry,
        }
    }

    /// Builds a wall set from configuration. Specs with an endpoint outside
    /// `0..=size` or with zero length are logged and skipped.
    pub fn from_specs(specs: &[WallSpec], size: i32, geometry: BoardGeometry) -> Self {
        let mut set = Self::new(geometry);
        for spec in specs {
            let start = Coord::new(spec.start[0], spec.start[1]);
            let end = Coord::new(spec.end[0], spec.end[1]);
            let on_board = |c: Coord| (0..=size).contains(&c.x) && (0..=size).contains(&c.y);
            if !on_board(start) || !on_board(end) {
                warn!(%start, %end, size, "skipping wall outside the board");
                continue;
            }
            if start == end {
                warn!(%start, "skipping zero-length wall");
                continue;
            }
            set.add_wall(start, end);
        }
        set
    }

    pub fn add_wall(&mut self, start: Coord, end: Coord) {
        self.walls.push(Wall::new(start, end, &self.geometry));
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Returns a copy of the walls.
    pub fn walls(&self) -> Vec<Wall> {
        self.walls.clone()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Returns true if moving in a straight line from the center of `from`
    /// to the center of `to` touches a wall.
    pub fn crosses_wall(&self, from: Coord, to: Coord) -> bool {
        let a = self.geometry.cell_center(from);
        let b = self.geometry.cell_center(to);
        self.walls
            .iter()
            .any(|w| segments_intersect(w.start_pos, w.end_pos, a, b))
    }
}

/// Cross product of `(b - a)` and `(c - a)`.
#[inline]
fn cross(a: Point, b: Point, c: Point) -> i64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Returns true if `c` lies inside the bounding box of `a`-`b`.
#[inline]
fn on_segment(a: Point, b: Point, c: Point) -> bool {
    c.x >= a.x.min(b.x) && c.x <= a.x.max(b.x) && c.y >= a.y.min(b.y) && c.y <= a.y.max(b.y)
}

/// Orientation test for segments `a`-`b` and `c`-`d`. Touching endpoints and
/// collinear overlap count as intersecting.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = cross(a, b, c);
    let d2 = cross(a, b, d);
    let d3 = cross(c, d, a);
    let d4 = cross(c, d, b);

    if d1.signum() * d2.signum() < 0 && d3.signum() * d4.signum() < 0 {
        return true;
    }

    (d1 == 0 && on_segment(a, b, c))
        || (d2 == 0 && on_segment(a, b, d))
        || (d3 == 0 && on_segment(c, d, a))
        || (d4 == 0 && on_segment(c, d, b))
}
