use super::differential::score_differential;
use super::esc::{MaxScorePolicy, adjusted_gross_score};
use super::index::handicap_index;
use crate::error::CoreError;
use crate::model::{HoleScore, RoundRecord, TeeSet};
use chrono::{DateTime, Utc};
use tracing::info;

/// Builds the record for a finished round.
///
/// Each hole gets its capped score filled in. Gross counts entered strokes
/// only; the adjusted total counts unplayed holes as net par.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` if no hole has strokes, if
/// `finished_at` precedes `started_at`, or if the tee set's ratings are unusable.
pub fn complete_round(
    holes: &[HoleScore],
    tee: &TeeSet,
    policy: MaxScorePolicy,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
) -> Result<RoundRecord, CoreError> {
    if holes.iter().all(|h| h.strokes.is_none()) {
        return Err(CoreError::invalid("round has no scores entered"));
    }
    if finished_at < started_at {
        return Err(CoreError::invalid("round finished before it started"));
    }

    let holes: Vec<HoleScore> = holes
        .iter()
        .map(|h| {
            let mut hole = h.clone();
            hole.adjusted_strokes = super::esc::adjusted_hole_score(h, policy);
            hole
        })
        .collect();

    let gross_score: i32 = holes.iter().filter_map(|h| h.strokes).sum();
    let adjusted = adjusted_gross_score(&holes, policy);
    let differential = score_differential(adjusted, tee.course_rating, tee.slope_rating)?;

    info!(
        tee = %tee.name,
        gross_score,
        adjusted,
        differential,
        "round completed"
    );

    Ok(RoundRecord {
        tee_set: tee.name.clone(),
        gross_score,
        adjusted_gross_score: adjusted,
        course_rating: tee.course_rating,
        slope_rating: tee.slope_rating,
        differential,
        holes,
        duration_minutes: (finished_at - started_at).num_minutes(),
        completed_at: finished_at,
    })
}

/// Handicap index over a history of rounds, most recent first.
#[must_use]
pub fn updated_handicap(history: &[RoundRecord]) -> Option<f64> {
    let differentials: Vec<f64> = history.iter().map(|r| r.differential).collect();
    handicap_index(&differentials)
}
