//! Pixel-space geometry of the board.

use quad_core::Coord;

/// A point in pixel space. Integer so that wall intersection tests are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

/// Conversion between grid coordinates and pixels.
///
/// Board-space positions (`cell_origin`, `cell_center`) exclude the screen
/// padding; only [`BoardGeometry::cell_at_pixel`] works in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    cell_size: i32,
    padding: [i32; 2],
}

impl BoardGeometry {
    pub const fn new(cell_size: i32, padding: [i32; 2]) -> Self {
        BoardGeometry { cell_size, padding }
    }

    pub const fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub const fn padding(&self) -> [i32; 2] {
        self.padding
    }

    /// Top-left corner of a cell. Also the pixel position of a wall endpoint
    /// given in grid-corner coordinates.
    pub fn cell_origin(&self, c: Coord) -> Point {
        let s = i64::from(self.cell_size);
        Point::new(i64::from(c.x) * s, i64::from(c.y) * s)
    }

    /// Center of a cell.
    pub fn cell_center(&self, c: Coord) -> Point {
        let origin = self.cell_origin(c);
        let half = i64::from(self.cell_size / 2);
        Point::new(origin.x + half, origin.y + half)
    }

    /// Top-left corner of a cell in screen space, where a host draws it.
    pub fn screen_position(&self, c: Coord) -> (f64, f64) {
        let origin = self.cell_origin(c);
        (
            (origin.x + i64::from(self.padding[0])) as f64,
            (origin.y + i64::from(self.padding[1])) as f64,
        )
    }

    /// The grid cell under a screen-space pointer position. The result may lie
    /// off the board; callers look it up on the grid.
    pub fn cell_at_pixel(&self, px: f64, py: f64) -> Coord {
        let s = f64::from(self.cell_size);
        let x = ((px - f64::from(self.padding[0])) / s).floor();
        let y = ((py - f64::from(self.padding[1])) / s).floor();
        Coord::new(x as i32, y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BoardGeometry {
        BoardGeometry::new(32, [20, 80])
    }

    #[test]
    fn origin_and_center() {
        let g = geometry();
        assert_eq!(g.cell_origin(Coord::new(2, 3)), Point::new(64, 96));
        assert_eq!(g.cell_center(Coord::new(2, 3)), Point::new(80, 112));
    }

    #[test]
    fn pixel_to_cell() {
        let g = geometry();
        assert_eq!(g.cell_at_pixel(20.0, 80.0), Coord::new(0, 0));
        assert_eq!(g.cell_at_pixel(51.9, 111.9), Coord::new(0, 0));
        assert_eq!(g.cell_at_pixel(52.0, 112.0), Coord::new(1, 1));
        assert_eq!(g.cell_at_pixel(10.0, 70.0), Coord::new(-1, -1));
    }

    #[test]
    fn screen_position_inverts_cell_at_pixel() {
        let g = geometry();
        let c = Coord::new(7, 12);
        let (x, y) = g.screen_position(c);
        assert_eq!(g.cell_at_pixel(x + 1.0, y + 1.0), c);
    }
}
