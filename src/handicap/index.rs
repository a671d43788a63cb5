//! Handicap index from recent score differentials.

use super::differential::round_tenths;

pub const MIN_ROUNDS_FOR_INDEX: usize = 3;
pub const MAX_ROUNDS_CONSIDERED: usize = 20;
pub const MIN_HANDICAP_INDEX: f64 = 0.0;
pub const MAX_HANDICAP_INDEX: f64 = 54.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    /// How many of the lowest differentials are averaged.
    pub count: usize,
    pub adjustment: f64,
}

// rounds played -> (lowest differentials used, adjustment)
const SELECTION_TABLE: [(usize, usize, f64); 18] = [
    (3, 1, -2.0),
    (4, 1, -1.0),
    (5, 1, 0.0),
    (6, 2, -1.0),
    (7, 2, 0.0),
    (8, 2, 0.0),
    (9, 3, 0.0),
    (10, 3, 0.0),
    (11, 3, 0.0),
    (12, 4, 0.0),
    (13, 4, 0.0),
    (14, 4, 0.0),
    (15, 5, 0.0),
    (16, 5, 0.0),
    (17, 6, 0.0),
    (18, 6, 0.0),
    (19, 7, 0.0),
    (20, 8, 0.0),
];

/// Row of the selection table for `rounds` rounds. Anything past 20 uses
/// the 20-round row; fewer than 3 has no row.
#[must_use]
pub fn selection_for(rounds: usize) -> Option<Selection> {
    if rounds < MIN_ROUNDS_FOR_INDEX {
        return None;
    }
    let row = SELECTION_TABLE
        .iter()
        .find(|(played, _, _)| *played == rounds)
        .map_or(
            Selection {
                count: 8,
                adjustment: 0.0,
            },
            |&(_, count, adjustment)| Selection { count, adjustment },
        );
    Some(row)
}

/// Handicap index from differentials ordered most recent first.
///
/// Non-finite values are not rounds and are skipped. Of the rest only the
/// first 20 are considered. Returns `None` below three rounds. The result is
/// rounded to one decimal and clamped to 0.0..=54.0.
#[must_use]
pub fn handicap_index(differentials: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = differentials
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .take(MAX_ROUNDS_CONSIDERED)
        .collect();
    let selection = selection_for(sorted.len())?;

    sorted.sort_by(f64::total_cmp);

    let lowest = &sorted[..selection.count];
    // count is at least 1 for every table row
    let average = lowest.iter().sum::<f64>() / lowest.len() as f64;

    let index = round_tenths(average + selection.adjustment);
    Some(index.clamp(MIN_HANDICAP_INDEX, MAX_HANDICAP_INDEX))
}
