//! Board module - the locked-cell map and its dense view
//!
//! The authoritative board state is [`LockedCells`], a sparse map from grid
//! coordinate to color. It may hold rows above the visible top (`y < 0`);
//! those never show up on the dense [`Board`], which is only a derived view
//! rebuilt from the map whenever a renderer asks for one.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use std::collections::HashMap;

use crate::types::{Color, Coord, BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Locked blocks keyed by grid coordinate
pub type LockedCells = HashMap<Coord, Color>;

/// Whether `(x, y)` can hold a falling block
///
/// There is no lower bound on `y`: cells above the top are always free,
/// which lets pieces spawn and rotate partly inside the spawn buffer.
pub fn is_cell_free(x: i8, y: i8, locked: &LockedCells) -> bool {
    x >= 0 && x < BOARD_WIDTH as i8 && y < BOARD_HEIGHT as i8 && !locked.contains_key(&(x, y))
}

/// Dense 10x20 color grid using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Color; BOARD_SIZE],
}

impl Board {
    /// Create a board showing only background
    pub fn new() -> Self {
        Self {
            cells: [BACKGROUND; BOARD_SIZE],
        }
    }

    /// Rebuild the visible board from the locked-cell map
    ///
    /// Entries outside the visible field are skipped.
    pub fn build_from(locked: &LockedCells) -> Self {
        let mut board = Self::new();
        for (&(x, y), &color) in locked {
            if let Some(idx) = Self::index(x, y) {
                board.cells[idx] = color;
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get the color at (x, y), or None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Color> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if (x, y) is inside the board and shows a block
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != BACKGROUND)
    }

    /// One row of colors, top row first
    pub fn row(&self, y: usize) -> &[Color] {
        let width = BOARD_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Copy into a row-major 2D grid (for snapshots)
    pub fn write_grid(&self, out: &mut [[Color; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
