//! Terminal input module.
//!
//! Maps `crossterm` key events onto session [`Command`](crate::types::Command)s.
//! There is no key-repeat handling here: every press the terminal reports
//! becomes exactly one command.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_press, should_quit};
