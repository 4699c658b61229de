//! The cell matrix.
//!
//! A grid is a square of cells, some of which are inactive. The playable area
//! is the inner square left after removing a `margin`-thick border, plus four
//! `fortress_size`-wide corner blocks which stay active even inside the
//! border. Cells are created once and mutated in place; only their occupant
//! changes during a game.

use crate::config::BoardConfig;
use crate::piece::PieceId;
use quad_core::Coord;

/// One square of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pos: Coord,
    active: bool,
    occupant: Option<PieceId>,
}

impl Cell {
    pub const fn pos(&self) -> Coord {
        self.pos
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Fixed-size square matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    margin: i32,
    fortress_size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid with every cell empty.
    pub fn new(size: i32, margin: i32, fortress_size: i32) -> Self {
        let size = size.max(0);
        let side = size as usize;
        let mut cells = Vec::with_capacity(side * side);
        for y in 0..size {
            for x in 0..size {
                cells.push(Cell {
                    pos: Coord::new(x, y),
                    active: Self::in_fortress_corner(x, y, size, fortress_size)
                        || Self::in_margin_board(x, y, size, margin),
                    occupant: None,
                });
            }
        }
        Grid {
            size,
            margin,
            fortress_size,
            cells,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.size, config.margin, config.fortress_size)
    }

    fn in_margin_board(x: i32, y: i32, size: i32, margin: i32) -> bool {
        x >= margin && x < size - margin && y >= margin && y < size - margin
    }

    fn in_fortress_corner(x: i32, y: i32, size: i32, fortress: i32) -> bool {
        let low_x = x < fortress;
        let high_x = x >= size - fortress;
        let low_y = y < fortress;
        let high_y = y >= size - fortress;
        (low_x || high_x) && (low_y || high_y)
    }

    pub const fn size(&self) -> i32 {
        self.size
    }

    pub const fn margin(&self) -> i32 {
        self.margin
    }

    pub const fn fortress_size(&self) -> i32 {
        self.fortress_size
    }

    /// Returns true if `c` lies inside the matrix (active or not).
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.size && c.y >= 0 && c.y < self.size
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        self.contains(c)
            .then(|| (c.y * self.size + c.x) as usize)
    }

    /// Returns the cell at `c`, or `None` outside the matrix.
    pub fn cell(&self, c: Coord) -> Option<&Cell> {
        self.index(c).map(|i| &self.cells[i])
    }

    /// Returns true if `c` is inside the matrix and active.
    pub fn is_active(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(Cell::is_active)
    }

    /// Returns true if `c` is active and holds no piece.
    pub fn is_free(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(|cell| cell.active && cell.is_empty())
    }

    /// Returns the piece on `c`. Inactive and out-of-bounds cells never hold
    /// one.
    pub fn occupant(&self, c: Coord) -> Option<PieceId> {
        self.cell(c).and_then(Cell::occupant)
    }

    /// Puts `piece` on `c`.
    ///
    /// Returns `false` and changes nothing if `c` is out of bounds, inactive,
    /// or already holds a different piece.
    pub fn set_occupant(&mut self, c: Coord, piece: PieceId) -> bool {
        let Some(i) = self.index(c) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if !cell.active {
            return false;
        }
        match cell.occupant {
            Some(existing) if existing != piece => false,
            _ => {
                cell.occupant = Some(piece);
                true
            }
        }
    }

    /// Empties `c`, returning the piece that stood there.
    pub fn clear_occupant(&mut self, c: Coord) -> Option<PieceId> {
        let i = self.index(c)?;
        self.cells[i].occupant.take()
    }

    /// Empties every cell.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.occupant = None;
        }
    }

    /// Iterates over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterates over active cells, row by row.
    pub fn active_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.active)
    }

    /// Iterates over occupied cells as `(position, piece)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        self.cells
            .iter()
            .filter_map(|c| c.occupant.map(|id| (c.pos, id)))
    }
}
