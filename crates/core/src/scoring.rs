//! Scoring and level progression.
//!
//! Line clears pay a fixed table times the current level; there are no drop,
//! combo or back-to-back bonuses.

use std::time::Duration;

use crate::types::{GRAVITY_INTERVALS, LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL, START_LEVEL};

/// Points for clearing `rows` rows at `level`.
///
/// # Panics
///
/// Panics unless `rows` is 1 to 4. One lock cannot clear any other non-zero
/// number of rows, and a zero-row lock never scores.
pub fn line_clear_points(rows: usize, level: u32) -> u32 {
    match rows {
        1..=4 => LINE_SCORES[rows] * level,
        _ => panic!("no reward for clearing {} rows in one lock", rows),
    }
}

/// Level after a scoring lock.
///
/// Level follows total lines (`lines / 10 + 1`) up to the maximum, and once
/// the maximum is reached it stays there.
pub fn level_for_lines(total_lines: u32, current_level: u32) -> u32 {
    if current_level >= MAX_LEVEL {
        return MAX_LEVEL;
    }
    (total_lines / LINES_PER_LEVEL + START_LEVEL).min(MAX_LEVEL)
}

/// Keep a level inside `START_LEVEL..=MAX_LEVEL`.
pub fn clamp_level(level: u32) -> u32 {
    level.clamp(START_LEVEL, MAX_LEVEL)
}

/// Time per gravity row at `level`.
pub fn gravity_interval(level: u32) -> Duration {
    GRAVITY_INTERVALS[(clamp_level(level) - START_LEVEL) as usize]
}
