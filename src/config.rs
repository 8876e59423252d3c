//! Runtime configuration for the terminal binary.
//!
//! Everything comes from environment variables; unset or unparsable values
//! fall back to defaults.
//!
//! | Variable               | Meaning                      | Default        |
//! |------------------------|------------------------------|----------------|
//! | `BLOCKFALL_SEED`       | piece generator seed         | from the clock |
//! | `BLOCKFALL_TICK_MS`    | frame length in milliseconds | 16             |
//! | `BLOCKFALL_RANDOMIZER` | `uniform` or `bag`           | `uniform`      |

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{PieceGenerator, SevenBag, UniformPieces};
use crate::types::TICK_MS;

/// How upcoming pieces are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Independent uniform draw per piece
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds
    Bag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "seven-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }

    pub fn build(&self, seed: u32) -> Box<dyn PieceGenerator> {
        match self {
            Randomizer::Uniform => Box::new(UniformPieces::new(seed)),
            Randomizer::Bag => Box::new(SevenBag::new(seed)),
        }
    }
}

/// Binary configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub randomizer: Randomizer,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick_ms: TICK_MS,
            randomizer: Randomizer::Uniform,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        let randomizer = lookup("BLOCKFALL_RANDOMIZER")
            .and_then(|s| Randomizer::from_str(&s))
            .unwrap_or_default();

        Self {
            seed,
            tick_ms,
            randomizer,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.subsec_nanos() ^ (d.as_secs() as u32))
}
