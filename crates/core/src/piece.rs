//! Piece module - a positioned, rotatable instance of a shape
//!
//! A `Piece` only knows how to move itself and where its cells are.
//! It never checks legality; see [`crate::collision`] for that.

use crate::shapes::{self, ShapeOffsets};
use crate::types::{Color, Coord, ShapeKind, SPAWN_X, SPAWN_Y, SPAWN_Y_I};

/// Active or upcoming piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    /// Clockwise quarter turns, always in `0..4`
    pub rotation: u8,
}

impl Piece {
    /// Create a piece at its spawn position
    pub fn new(kind: ShapeKind) -> Self {
        let y = if kind == ShapeKind::I { SPAWN_Y_I } else { SPAWN_Y };
        Self::at(kind, SPAWN_X, y)
    }

    /// Create an unrotated piece with its pivot at `(x, y)`
    pub fn at(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: 0,
        }
    }

    pub fn color(&self) -> Color {
        shapes::color(self.kind)
    }

    /// Pivot-relative offsets for the current rotation
    pub fn offsets(&self) -> ShapeOffsets {
        shapes::rotated_offsets(self.kind, self.rotation)
    }

    /// Absolute grid cells covered by the piece
    pub fn occupied_cells(&self) -> [Coord; 4] {
        self.offsets().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Lowest row the piece reaches
    pub fn bottom(&self) -> i8 {
        self.occupied_cells()
            .iter()
            .fold(i8::MIN, |lowest, &(_, y)| lowest.max(y))
    }

    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation = (self.rotation + 1) % 4;
    }
}
