//! Scoring module - placement rewards, line clears and combo streaks
//!
//! Rules:
//! - A placement that clears nothing earns `POINTS_PER_BLOCK` per stamped cell and
//!   breaks any streak.
//! - A clear earns `POINTS_PER_LINE` per line, plus `CLEAN_CLEAR_BONUS_PER_LINE` per
//!   line if it produced no junk.
//! - A clean clear extends the combo by one; any junk resets it to zero.
//! - From the second link of a streak on, `COMBO_STEP_BONUS * (combo - 1)` is added.

use crate::types::{
    CLEAN_CLEAR_BONUS_PER_LINE, COMBO_STEP_BONUS, POINTS_PER_BLOCK, POINTS_PER_LINE,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Per-block reward (only when nothing was cleared).
    pub placement_score: u32,
    /// Base points for cleared lines.
    pub line_clear_score: u32,
    /// Extra points for a clear that created no junk.
    pub clean_bonus: u32,
    /// Streak bonus for the combo reached by this placement.
    pub combo_bonus: u32,
    pub total: u32,
}

/// Combo value after a placement
pub fn next_combo(combo_in: u32, lines_cleared: u32, junk_created: u32) -> u32 {
    if lines_cleared == 0 || junk_created > 0 {
        0
    } else {
        combo_in.saturating_add(1)
    }
}

/// Streak bonus for a combo value (combo 2 => 100, combo 3 => 200, ...)
pub fn calculate_combo_bonus(combo: u32) -> u32 {
    if combo <= 1 {
        return 0;
    }
    COMBO_STEP_BONUS.saturating_mul(combo - 1)
}

/// Calculate the score of one placement.
///
/// `combo_out` is the combo after this placement (see [`next_combo`]).
pub fn calculate_score(
    cell_count: u32,
    lines_cleared: u32,
    junk_created: u32,
    combo_out: u32,
) -> ScoreResult {
    if lines_cleared == 0 {
        let placement_score = POINTS_PER_BLOCK.saturating_mul(cell_count);
        return ScoreResult {
            placement_score,
            total: placement_score,
            ..ScoreResult::default()
        };
    }

    let line_clear_score = POINTS_PER_LINE.saturating_mul(lines_cleared);
    let clean_bonus = if junk_created == 0 {
        CLEAN_CLEAR_BONUS_PER_LINE.saturating_mul(lines_cleared)
    } else {
        0
    };
    let combo_bonus = calculate_combo_bonus(combo_out);
    let total = line_clear_score
        .saturating_add(clean_bonus)
        .saturating_add(combo_bonus);

    ScoreResult {
        placement_score: 0,
        line_clear_score,
        clean_bonus,
        combo_bonus,
        total,
    }
}
