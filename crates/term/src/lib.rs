//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: session snapshots are drawn into
//! a framebuffer of styled character cells, which is then flushed to the
//! terminal as a diff against the previous frame.
//!
//! Board cells are two columns wide to compensate for the aspect ratio of
//! terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{term_color, Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
