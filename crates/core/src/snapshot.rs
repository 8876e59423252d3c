//! Snapshot module - plain-data copy of a session for rendering
//!
//! Renderers read a [`GameSnapshot`] instead of borrowing the session, so
//! drawing never needs to know about generators or the locked-cell map.

use crate::piece::Piece;
use crate::shapes::ShapeOffsets;
use crate::types::{Color, Coord, Phase, ShapeKind, BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardGrid = [[Color; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The falling piece, resolved to absolute cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    pub cells: [Coord; 4],
    pub color: Color,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.occupied_cells(),
            color: value.color(),
        }
    }
}

/// The upcoming piece, as relative offsets for a preview box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewSnapshot {
    pub kind: ShapeKind,
    pub offsets: ShapeOffsets,
    pub color: Color,
}

impl From<Piece> for PreviewSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            offsets: value.offsets(),
            color: value.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Locked cells only; empty cells hold [`BACKGROUND`]
    pub board: BoardGrid,
    pub current: ActiveSnapshot,
    pub next: PreviewSnapshot,
    pub score: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub phase: Phase,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Color at a visible cell, with the falling piece drawn over the stack
    pub fn cell_color(&self, x: i8, y: i8) -> Option<Color> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        if self.current.cells.contains(&(x, y)) {
            return Some(self.current.color);
        }
        Some(self.board[y as usize][x as usize])
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[BACKGROUND; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: ActiveSnapshot::from(Piece::new(ShapeKind::I)),
            next: PreviewSnapshot::from(Piece::new(ShapeKind::I)),
            score: 0,
            lines: 0,
            fall_interval_ms: 0,
            phase: Phase::Playing,
            episode_id: 0,
        }
    }
}
