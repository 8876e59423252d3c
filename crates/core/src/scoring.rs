//! Scoring module - line-clear points and fall-speed progression
//!
//! One fixed table: 100 / 300 / 500 / 800 points for 1 / 2 / 3 / 4+ rows.
//! There is no level multiplier and no drop bonus. Speed rises in steps,
//! once per ten cleared lines, down to a floor.

use crate::types::{BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS, LINES_PER_SPEEDUP, LINE_SCORES};

/// Points for clearing `rows` rows with a single lock
pub fn line_clear_score(rows: usize) -> u32 {
    LINE_SCORES[rows.min(LINE_SCORES.len() - 1)]
}

/// Fall-speed parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedConfig {
    /// Interval per row before any speed-up
    pub base_ms: u32,
    /// Reduction per speed-up step
    pub step_ms: u32,
    /// Fastest allowed interval (clamped to at least 1ms)
    pub floor_ms: u32,
    /// Cleared lines per speed-up step
    pub lines_per_step: u32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            base_ms: BASE_FALL_MS,
            step_ms: FALL_STEP_MS,
            floor_ms: FALL_FLOOR_MS,
            lines_per_step: LINES_PER_SPEEDUP,
        }
    }
}

impl SpeedConfig {
    /// Completed speed-up steps after `total_lines` cleared lines
    pub fn steps(&self, total_lines: u32) -> u32 {
        total_lines / self.lines_per_step.max(1)
    }

    /// Milliseconds per row after `total_lines` cleared lines
    ///
    /// `max(floor, base - steps * step)`, never zero.
    pub fn fall_interval_ms(&self, total_lines: u32) -> u32 {
        let reduction = self.steps(total_lines).saturating_mul(self.step_ms);
        self.base_ms
            .saturating_sub(reduction)
            .max(self.floor_ms.max(1))
    }
}
