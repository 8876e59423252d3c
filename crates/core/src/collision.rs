//! Collision module - legality checks and the kick search
//!
//! Every move is speculative: the piece is mutated, checked against the
//! locked cells, and rolled back if the result is illegal. Callers never
//! observe a piece in an illegal intermediate position.

use crate::board::{is_cell_free, LockedCells};
use crate::piece::Piece;

/// Horizontal offsets tried, in order, when a rotation collides
pub const KICK_OFFSETS: [i8; 4] = [-1, 1, -2, 2];

/// Check if every cell of `piece` is free
///
/// Cells above the top row count as free.
pub fn is_valid_placement(piece: &Piece, locked: &LockedCells) -> bool {
    piece
        .occupied_cells()
        .iter()
        .all(|&(x, y)| is_cell_free(x, y, locked))
}

/// Try to move the piece; reverts and returns false if the result collides
pub fn attempt_translate(piece: &mut Piece, dx: i8, dy: i8, locked: &LockedCells) -> bool {
    piece.translate(dx, dy);
    if is_valid_placement(piece, locked) {
        return true;
    }
    piece.translate(-dx, -dy);
    false
}

/// Rotate clockwise, kicking sideways if the plain rotation collides
///
/// Tries the kicks in [`KICK_OFFSETS`] order while keeping the new rotation;
/// the first legal one wins. The vertical position is never adjusted. If
/// nothing fits, both rotation and column are restored and `false` is
/// returned.
pub fn attempt_rotate(piece: &mut Piece, locked: &LockedCells) -> bool {
    let original_rotation = piece.rotation;
    let original_x = piece.x;

    piece.rotate_clockwise();
    if is_valid_placement(piece, locked) {
        return true;
    }

    for &shift in KICK_OFFSETS.iter() {
        piece.x = original_x + shift;
        if is_valid_placement(piece, locked) {
            return true;
        }
    }

    piece.rotation = original_rotation;
    piece.x = original_x;
    false
}

/// Drop the piece to the lowest legal row; returns rows travelled
pub fn hard_drop(piece: &mut Piece, locked: &LockedCells) -> u32 {
    let mut distance = 0;
    while attempt_translate(piece, 0, 1, locked) {
        distance += 1;
    }
    distance
}
