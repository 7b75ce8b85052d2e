//! Scoring module - points, level and gravity speed
//!
//! Rules:
//! - Each cleared line is worth a flat 100 points (no level multiplier).
//! - Level is derived from score alone: `score / 1000 + 1`.
//! - Gravity starts at 1000ms per row and loses 100ms per level, bottoming
//!   out at 100ms from level 10 on.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, MAX_SPEED_LEVEL, POINTS_PER_LEVEL, POINTS_PER_LINE};

/// Score and level after a landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points earned by this landing
    pub points: u32,
    pub score: u32,
    pub level: u32,
}

/// Points for clearing `lines` rows at once
pub fn calculate_line_score(lines: u32) -> u32 {
    lines.saturating_mul(POINTS_PER_LINE)
}

/// Level implied by a score (levels start at 1)
pub fn calculate_level(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Apply a landing that cleared `lines` rows on top of `previous_score`
pub fn calculate_score(previous_score: u32, lines: u32) -> ScoreResult {
    let points = calculate_line_score(lines);
    let score = previous_score.saturating_add(points);
    ScoreResult {
        points,
        score,
        level: calculate_level(score),
    }
}

/// Gravity interval for a level (in milliseconds)
///
/// Level is clamped to `1..=MAX_SPEED_LEVEL` so the interval stays positive.
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let steps = level.clamp(1, MAX_SPEED_LEVEL) - 1;
    BASE_DROP_MS - steps * DROP_STEP_MS
}
