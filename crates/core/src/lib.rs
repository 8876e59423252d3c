//! Core game logic - pure, deterministic, and testable
//!
//! All the rules of the falling-block puzzle live here: the shape catalog,
//! the falling piece, the locked-cell map, collision and kicks, line clears,
//! scoring and the tick-driven session. Nothing in this crate touches the
//! terminal, the clock or a global random source.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven shapes, their colors and the quarter-turn rule
//! - [`piece`]: a shape placed on the board with a rotation
//! - [`board`]: the authoritative locked-cell map and its dense view
//! - [`collision`]: placement checks, translation, rotation with kicks
//! - [`line_clear`]: full-row detection and the downward shift
//! - [`scoring`]: line-clear points and fall-speed progression
//! - [`rng`]: injectable piece generators
//! - [`session`]: the state machine driven by commands and elapsed time
//! - [`snapshot`]: plain-data copy of a session for renderers
//!
//! # Rules
//!
//! - Pieces spawn with their pivot at column 5, row 1 (the I piece at row 0)
//! - Rotation is clockwise only; a blocked turn tries columns -1, +1, -2, +2
//! - Rows above the top of the board are legal while falling, never when locking
//! - 100 / 300 / 500 / 800 points for 1 / 2 / 3 / 4+ rows in one lock
//! - Every 10 cleared lines the fall interval drops by 50ms, down to 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::rng::FixedSequence;
//! use blockfall_core::types::{Command, ShapeKind};
//! use blockfall_core::GameSession;
//!
//! let mut game = GameSession::with_generator(FixedSequence::repeat(ShapeKind::I));
//!
//! game.enqueue(Command::MoveRight);
//! game.enqueue(Command::HardDrop);
//! game.advance(16);
//!
//! assert_eq!(game.locked_cells().len(), 4);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod line_clear;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockedCells};
pub use collision::{attempt_rotate, attempt_translate, hard_drop, is_valid_placement};
pub use line_clear::clear_full_rows;
pub use piece::Piece;
pub use rng::{FixedSequence, PieceGenerator, SevenBag, SimpleRng, UniformPieces};
pub use scoring::{line_clear_score, SpeedConfig};
pub use session::{GameSession, LockEvent};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PreviewSnapshot};
