//! Per-hole score caps for handicap purposes.

use crate::model::HoleScore;
use serde::{Deserialize, Serialize};

pub const HOLES_PER_ROUND: i32 = 18;

/// How the maximum countable score on a hole is chosen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum MaxScorePolicy {
    /// Par + 2, for players without a known course handicap.
    DoubleBogey,
    /// Par + 2 + strokes the player receives on the hole.
    NetDoubleBogey { course_handicap: i32 },
}

/// Handicap strokes received on a hole with the given stroke index.
///
/// Negative course handicaps give strokes back starting from the easiest holes.
#[must_use]
pub fn strokes_received(course_handicap: i32, stroke_index: Option<u8>) -> i32 {
    let base = course_handicap.div_euclid(HOLES_PER_ROUND);
    let remainder = course_handicap.rem_euclid(HOLES_PER_ROUND);
    let extra = match stroke_index {
        Some(si) if i32::from(si) <= remainder => 1,
        _ => 0,
    };
    base + extra
}

#[must_use]
pub fn max_hole_score(hole: &HoleScore, policy: MaxScorePolicy) -> i32 {
    match policy {
        MaxScorePolicy::DoubleBogey => hole.par + 2,
        MaxScorePolicy::NetDoubleBogey { course_handicap } => {
            hole.par + 2 + strokes_received(course_handicap, hole.stroke_index)
        }
    }
}

#[must_use]
pub fn equitable_stroke_control_adjusted_score(raw_score: i32, max_allowed: i32) -> i32 {
    raw_score.min(max_allowed)
}

/// The capped score for a hole, or `None` while no strokes are entered.
#[must_use]
pub fn adjusted_hole_score(hole: &HoleScore, policy: MaxScorePolicy) -> Option<i32> {
    hole.strokes
        .map(|raw| equitable_stroke_control_adjusted_score(raw, max_hole_score(hole, policy)))
}

/// What an unplayed hole counts as: par plus strokes received.
#[must_use]
pub fn net_par(hole: &HoleScore, policy: MaxScorePolicy) -> i32 {
    match policy {
        MaxScorePolicy::DoubleBogey => hole.par,
        MaxScorePolicy::NetDoubleBogey { course_handicap } => {
            hole.par + strokes_received(course_handicap, hole.stroke_index)
        }
    }
}

/// Adjusted gross score for a round. Holes without strokes count as net par.
#[must_use]
pub fn adjusted_gross_score(holes: &[HoleScore], policy: MaxScorePolicy) -> i32 {
    holes
        .iter()
        .map(|h| adjusted_hole_score(h, policy).unwrap_or_else(|| net_par(h, policy)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_allocation_by_index() {
        assert_eq!(strokes_received(0, Some(1)), 0);
        assert_eq!(strokes_received(10, Some(10)), 1);
        assert_eq!(strokes_received(10, Some(11)), 0);
        assert_eq!(strokes_received(18, Some(18)), 1);
        assert_eq!(strokes_received(20, Some(2)), 2);
        assert_eq!(strokes_received(20, Some(3)), 1);
        assert_eq!(strokes_received(-2, Some(17)), -1);
        assert_eq!(strokes_received(-2, Some(16)), 0);
        assert_eq!(strokes_received(5, None), 0);
    }
}
