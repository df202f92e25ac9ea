//! Scoring module - line clear points, hard drop bonus, level and fall speed
//!
//! Rules:
//! - One lock clearing 1/2/3/4 lines scores 100/300/500/800; more than four scores `100 * n`.
//! - The base is multiplied by the locked piece's score multiplier.
//! - A hard drop earns 2 points per cell travelled.
//! - Level is `lines / 10 + 1`.
//! - Fall interval is `base / (1 + (level - 1) * 0.1)` seconds.

use crate::types::{FALL_SPEED_STEP, HARD_DROP_POINTS_PER_CELL, LEVEL_LINES, LINE_SCORES};

/// Base points for clearing `lines` rows with one lock
pub fn line_clear_base(lines: usize) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&score) => score,
        None => u32::try_from(lines)
            .unwrap_or(u32::MAX)
            .saturating_mul(100),
    }
}

/// Points awarded for a clear by a piece with the given multiplier
pub fn line_clear_score(lines: usize, multiplier: u32) -> u32 {
    line_clear_base(lines).saturating_mul(multiplier)
}

/// Bonus for a hard drop of `cells` rows
pub fn hard_drop_bonus(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINTS_PER_CELL)
}

/// Level management
/// Level starts at 1 and increases every 10 lines cleared
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LEVEL_LINES + 1
}

/// Seconds between automatic drops at a level
///
/// Strictly decreasing in `level`; always positive for a positive base.
pub fn fall_speed_for_level(base: f64, level: u32) -> f64 {
    let level = level.max(1);
    base / (1.0 + f64::from(level - 1) * FALL_SPEED_STEP)
}
