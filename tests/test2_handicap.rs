mod common;

use chrono::Duration as ChronoDuration;
use common::*;
use golf_companion::handicap::{
    MaxScorePolicy, adjusted_gross_score, adjusted_hole_score, complete_round, course_handicap,
    equitable_stroke_control_adjusted_score, handicap_index, max_hole_score, score_differential,
    updated_handicap,
};
use golf_companion::model::{HoleScore, ScoreDisplay};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test2_index_needs_three_rounds() {
    assert_eq!(handicap_index(&[]), None);
    assert_eq!(handicap_index(&[10.0, 12.0]), None);
}

#[test]
fn test2_three_rounds_use_lowest_minus_two() {
    let index = handicap_index(&[5.0, 6.0, 7.0]).unwrap();
    assert!(close(index, 3.0), "{index}");

    let index = handicap_index(&[7.0, 5.0, 6.0]).unwrap();
    assert!(close(index, 3.0), "{index}");
}

#[test]
fn test2_small_sample_adjustments() {
    // four rounds: lowest one, -1.0
    let index = handicap_index(&[12.0, 10.0, 14.0, 11.0]).unwrap();
    assert!(close(index, 9.0), "{index}");
    // five rounds: lowest one, no adjustment
    let index = handicap_index(&[12.0, 10.0, 14.0, 11.0, 13.0]).unwrap();
    assert!(close(index, 10.0), "{index}");
    // six rounds: lowest two averaged, -1.0
    let index = handicap_index(&[12.0, 10.0, 14.0, 11.0, 13.0, 15.0]).unwrap();
    assert!(close(index, 9.5), "{index}");
}

#[test]
fn test2_twenty_rounds_average_best_eight() {
    // eight lowest: four 10.0 and four 10.5, average 10.25
    let mut diffs = vec![10.0, 10.5, 10.0, 10.5, 10.0, 10.5, 10.0, 10.5];
    diffs.extend(std::iter::repeat_n(20.0, 12));
    assert_eq!(diffs.len(), 20);
    let index = handicap_index(&diffs).unwrap();
    assert!(close(index, 10.3), "{index}");
}

#[test]
fn test2_only_twenty_most_recent_count() {
    let mut diffs: Vec<f64> = std::iter::repeat_n(15.0, 20).collect();
    // older rounds beyond the twentieth are ignored
    diffs.extend([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let index = handicap_index(&diffs).unwrap();
    assert!(close(index, 15.0), "{index}");
}

#[test]
fn test2_index_is_clamped() {
    let index = handicap_index(&[-3.0, 1.0, 2.0]).unwrap();
    assert!(close(index, 0.0), "{index}");
    let index = handicap_index(&[70.0, 80.0, 90.0, 75.0, 85.0]).unwrap();
    assert!(close(index, 54.0), "{index}");
}

#[test]
fn test2_non_finite_differentials_do_not_count() {
    assert_eq!(handicap_index(&[f64::NAN, 5.0, 6.0]), None);
    let index = handicap_index(&[5.0, f64::NAN, 6.0, f64::NEG_INFINITY, 7.0]).unwrap();
    assert!(close(index, 3.0), "{index}");
}

#[test]
fn test2_score_differential() {
    assert!(close(score_differential(90, 72.0, 113.0).unwrap(), 18.0));
    // (113 / 130) * (85 - 71.3) = 11.908...
    assert!(close(score_differential(85, 71.3, 130.0).unwrap(), 11.9));
    assert!(close(score_differential(70, 72.0, 113.0).unwrap(), -2.0));
}

#[test]
fn test2_bad_slope_is_an_error() {
    assert!(score_differential(90, 72.0, 0.0).is_err());
    assert!(score_differential(90, 72.0, -113.0).is_err());
    assert!(score_differential(90, 72.0, f64::NAN).is_err());
    assert!(course_handicap(10.0, 0.0, 72.0, 72).is_err());
}

#[test]
fn test2_course_handicap_rounds_half_up() {
    assert_eq!(course_handicap(10.0, 113.0, 72.0, 72).unwrap(), 10);
    // 12.4 * 125 / 113 + (71.5 - 72) = 13.217...
    assert_eq!(course_handicap(12.4, 125.0, 71.5, 72).unwrap(), 13);
    // 0.5 exactly goes up
    assert_eq!(course_handicap(0.0, 113.0, 72.5, 72).unwrap(), 1);
}

#[test]
fn test2_double_bogey_cap() {
    let hole = HoleScore::new(3, 4, Some(9));
    assert_eq!(max_hole_score(&hole, MaxScorePolicy::DoubleBogey), 6);
    assert_eq!(adjusted_hole_score(&hole, MaxScorePolicy::DoubleBogey), Some(6));
    assert_eq!(equitable_stroke_control_adjusted_score(5, 6), 5);
    assert_eq!(adjusted_hole_score(&HoleScore::new(3, 4, None), MaxScorePolicy::DoubleBogey), None);
}

#[test]
fn test2_net_double_bogey_uses_stroke_index() {
    let policy = MaxScorePolicy::NetDoubleBogey { course_handicap: 20 };
    // 20 = one stroke everywhere plus an extra on stroke index 1 and 2
    let hard = HoleScore::new(5, 4, Some(12)).with_stroke_index(2);
    let easy = HoleScore::new(6, 4, Some(12)).with_stroke_index(3);
    assert_eq!(adjusted_hole_score(&hard, policy), Some(8));
    assert_eq!(adjusted_hole_score(&easy, policy), Some(7));
}

#[test]
fn test2_adjusted_gross_counts_unplayed_as_net_par() {
    let mut strokes = vec![Some(4); 17];
    strokes.push(None);
    strokes[0] = Some(10);
    let holes = par_four_holes(&strokes);
    // hole 1 capped at 6, holes 2-17 at 4, hole 18 unplayed counts 4
    assert_eq!(adjusted_gross_score(&holes, MaxScorePolicy::DoubleBogey), 74);
}

#[test]
fn test2_complete_round_builds_the_record() {
    let mut strokes = vec![Some(5); 18];
    strokes[4] = Some(9);
    let holes = par_four_holes(&strokes);
    let started = fixed_now();
    let finished = started + ChronoDuration::minutes(250);

    let record = complete_round(
        &holes,
        &championship_tee(),
        MaxScorePolicy::DoubleBogey,
        started,
        finished,
    )
    .unwrap();

    assert_eq!(record.gross_score, 94);
    assert_eq!(record.adjusted_gross_score, 91);
    assert!(close(record.differential, 19.0));
    assert_eq!(record.duration_minutes, 250);
    assert_eq!(record.completed_at, finished);
    assert_eq!(record.holes[4].adjusted_strokes, Some(6));
    assert_eq!(record.holes[4].score_display(), Some(ScoreDisplay::Other));
    assert_eq!(record.holes[0].score_display(), Some(ScoreDisplay::Bogey));
}

#[test]
fn test2_complete_round_rejects_empty_card() {
    let holes = par_four_holes(&[]);
    let now = fixed_now();
    assert!(
        complete_round(&holes, &championship_tee(), MaxScorePolicy::DoubleBogey, now, now).is_err()
    );
}

#[test]
fn test2_updated_handicap_from_history() {
    let tee = championship_tee();
    let mut history = Vec::new();
    for (i, s) in [5, 6, 7].into_iter().enumerate() {
        let holes = par_four_holes(&vec![Some(s); 18]);
        let start = fixed_now() - ChronoDuration::days(i64::try_from(i).unwrap());
        let record = complete_round(
            &holes,
            &tee,
            MaxScorePolicy::DoubleBogey,
            start,
            start + ChronoDuration::hours(4),
        )
        .unwrap();
        history.push(record);
    }
    // differentials 18, 36, 36 (sevens cap at six); lowest 18 minus 2
    let index = updated_handicap(&history).unwrap();
    assert!(close(index, 16.0), "{index}");
    assert_eq!(updated_handicap(&history[..2]), None);
}
