//! Tick interval policy.

use super::types::Difficulty;
use crate::constants::{MIN_TICK_MS, SPEED_STEP_MS};

/// Milliseconds between ticks for the given difficulty and score.
///
/// With scaling disabled this is the difficulty's base interval. With scaling
/// enabled every point shaves `SPEED_STEP_MS` off, floored at `MIN_TICK_MS`.
pub fn tick_interval_ms(difficulty: Difficulty, score: u32, scaling: bool) -> u64 {
    let base = difficulty.base_interval_ms();
    if !scaling {
        return base;
    }
    base.saturating_sub(u64::from(score) * SPEED_STEP_MS)
        .max(MIN_TICK_MS)
}
