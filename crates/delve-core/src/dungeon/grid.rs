//! Fixed-size tile grid
//!
//! Each cell holds at most one topology reference. Cells are written once by
//! [`Grid::set`]; the only later change is the corridor-to-intersection
//! hand-over done through [`Grid::replace`].

use log::warn;

use super::coord::Coord;
use super::topology::Tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Tile>,
}

impl Grid {
    /// Non-positive dimensions produce a grid in which no cell exists.
    ///
    /// So do dimensions too large to allocate.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);

        let mut cells = Vec::new();
        let reserved = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| cells.try_reserve_exact(len).is_ok());
        let Some(len) = reserved else {
            warn!("cannot allocate a {width}x{height} grid, using an empty one");
            return Self {
                width: 0,
                height: 0,
                cells,
            };
        };

        cells.resize(len, Tile::Empty);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, c: Coord) -> Option<usize> {
        self.exists(c)
            .then(|| c.y as usize * self.width as usize + c.x as usize)
    }

    pub fn exists(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    pub fn occupied(&self, c: Coord) -> bool {
        !self.get(c).is_empty()
    }

    /// `Tile::Empty` for empty cells and for anything off the grid
    pub fn get(&self, c: Coord) -> Tile {
        self.index(c).map_or(Tile::Empty, |i| self.cells[i])
    }

    /// Claim an empty cell. Writes outside the grid are ignored.
    pub fn set(&mut self, c: Coord, tile: Tile) {
        debug_assert!(self.exists(c), "write outside grid at {c}");
        if let Some(i) = self.index(c) {
            debug_assert!(
                self.cells[i].is_empty(),
                "cell {c} already holds {:?}",
                self.cells[i]
            );
            self.cells[i] = tile;
        }
    }

    /// Hand a cell over to another topology object, returning the previous claim
    pub(crate) fn replace(&mut self, c: Coord, tile: Tile) -> Tile {
        match self.index(c) {
            Some(i) => core::mem::replace(&mut self.cells[i], tile),
            None => Tile::Empty,
        }
    }

    /// A free cell whose whole Moore neighbourhood is also free
    pub fn is_buildable(&self, c: Coord) -> bool {
        if !self.exists(c) || self.occupied(c) {
            return false;
        }
        !c.neighbours().any(|n| self.occupied(n))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|t| !t.is_empty()).count()
    }

    /// Every cell with its content, row by row from `y = 0`
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(i, &tile)| {
            let i = i as i32;
            (Coord::new(i % width, i / width), tile)
        })
    }
}
