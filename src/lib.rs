//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, tests and
//! benches can write `blockfall::{core,input,term,types}`, and holds the
//! runtime configuration read from the environment.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
