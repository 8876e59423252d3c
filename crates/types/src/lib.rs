//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be
//! shared by the core rules, the terminal view and the input mapping.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - Rows above the top (`y < 0`) form the spawn buffer. They are never drawn.
//!
//! # Fall Speed
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//! | `BASE_FALL_MS` | 500 | Interval per row with no cleared lines |
//! | `FALL_STEP_MS` | 50 | Speed-up per `LINES_PER_SPEEDUP` cleared lines |
//! | `FALL_FLOOR_MS` | 100 | Fastest possible fall interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Phase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(ShapeKind::T.as_str(), "T");
//! assert_eq!(Phase::default(), Phase::Playing);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fall interval with zero cleared lines (half a second per row)
pub const BASE_FALL_MS: u32 = 500;

/// Amount the fall interval shrinks per speed-up step
pub const FALL_STEP_MS: u32 = 50;

/// The fall interval never drops below this floor
pub const FALL_FLOOR_MS: u32 = 100;

/// Cleared lines needed for each speed-up step
pub const LINES_PER_SPEEDUP: u32 = 10;

/// Pivot column for freshly spawned pieces
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;

/// Pivot row for freshly spawned pieces
pub const SPAWN_Y: i8 = 1;

/// The I piece spawns one row higher so its bar sits on the top row
pub const SPAWN_Y_I: i8 = 0;

/// Points awarded per lock, indexed by rows cleared (4+ share the last entry)
///
/// - 0 rows: 0 points
/// - 1 row: 100 points
/// - 2 rows: 300 points
/// - 3 rows: 500 points
/// - 4 or more rows: 800 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Grid coordinate `(x, y)`: x grows to the right, y grows downward.
pub type Coord = (i8, i8);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GREY: Color = Color::new(128, 128, 128);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const ORANGE: Color = Color::new(255, 165, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of board cells that hold no locked block
pub const BACKGROUND: Color = Color::BLACK;

/// The seven piece kinds
///
/// Each kind has a fixed shape and color (see `blockfall_core::shapes`):
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Uppercase letter, as shown in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
        }
    }
}

/// Discrete input commands consumed by the game session
///
/// Commands are queued by the presentation layer and applied in arrival
/// order on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks the piece if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise, kicking sideways if needed
    Rotate,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Throw the current game away and start a fresh one
    Reset,
}

/// Session lifecycle
///
/// `GameOver` is terminal; only `Command::Reset` leads back to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}
