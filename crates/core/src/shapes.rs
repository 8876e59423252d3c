//! Shapes module - the seven piece kinds as pivot-relative offsets
//!
//! Every shape is data: four `(x, y)` offsets around a pivot, the pivot
//! itself listed first as `(0, 0)`. Rotation is one generic quarter-turn
//! transform, `(x, y) -> (y, -x)`, applied once per rotation step.
//!
//! The O offsets are not closed under that transform (they would orbit the
//! pivot), so O is the one documented exception: it never rotates.

use crate::types::{Color, Coord, ShapeKind};

/// Shape of a piece - 4 offsets from the pivot
pub type ShapeOffsets = [Coord; 4];

const I_OFFSETS: ShapeOffsets = [(0, 0), (-1, 0), (1, 0), (2, 0)];
const O_OFFSETS: ShapeOffsets = [(0, 0), (1, 0), (0, 1), (1, 1)];
const T_OFFSETS: ShapeOffsets = [(0, 0), (-1, 0), (1, 0), (0, -1)];
const S_OFFSETS: ShapeOffsets = [(0, 0), (-1, 0), (0, -1), (1, -1)];
const Z_OFFSETS: ShapeOffsets = [(0, 0), (1, 0), (0, -1), (-1, -1)];
const J_OFFSETS: ShapeOffsets = [(0, 0), (-1, 0), (1, 0), (-1, -1)];
const L_OFFSETS: ShapeOffsets = [(0, 0), (-1, 0), (1, 0), (1, -1)];

/// Catalog offsets for a shape kind (rotation 0)
pub fn offsets(kind: ShapeKind) -> ShapeOffsets {
    match kind {
        ShapeKind::I => I_OFFSETS,
        ShapeKind::O => O_OFFSETS,
        ShapeKind::T => T_OFFSETS,
        ShapeKind::S => S_OFFSETS,
        ShapeKind::Z => Z_OFFSETS,
        ShapeKind::J => J_OFFSETS,
        ShapeKind::L => L_OFFSETS,
    }
}

/// Fixed display color for a shape kind
pub fn color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::I => Color::CYAN,
        ShapeKind::O => Color::YELLOW,
        ShapeKind::T => Color::MAGENTA,
        ShapeKind::S => Color::GREEN,
        ShapeKind::Z => Color::RED,
        ShapeKind::J => Color::BLUE,
        ShapeKind::L => Color::ORANGE,
    }
}

/// Whether the kind takes part in rotation at all
pub fn rotates(kind: ShapeKind) -> bool {
    kind != ShapeKind::O
}

/// One clockwise quarter turn (y grows downward)
#[inline(always)]
pub fn quarter_turn((x, y): Coord) -> Coord {
    (y, -x)
}

/// Offsets of `kind` after `rotation` clockwise quarter turns
///
/// `rotation` is taken modulo 4.
pub fn rotated_offsets(kind: ShapeKind, rotation: u8) -> ShapeOffsets {
    let mut out = offsets(kind);
    if !rotates(kind) {
        return out;
    }
    for _ in 0..(rotation % 4) {
        for offset in out.iter_mut() {
            *offset = quarter_turn(*offset);
        }
    }
    out
}
