use crate::error::CoreError;

/// Slope rating of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

// absorbs binary representation error such as 0.15 * 10 = 1.4999999999999998
const ROUNDING_EPSILON: f64 = 1e-9;

/// Rounds to one decimal place, halves going up.
#[must_use]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5 + ROUNDING_EPSILON).floor() / 10.0
}

/// Rounds to the nearest integer, halves going up.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5 + ROUNDING_EPSILON).floor()
}

fn check_slope(slope_rating: f64) -> Result<(), CoreError> {
    if !slope_rating.is_finite() || slope_rating <= 0.0 {
        return Err(CoreError::invalid(format!(
            "slope rating must be a positive number, got {slope_rating}"
        )));
    }
    Ok(())
}

/// `(113 / slope) * (adjusted gross - course rating)`, to one decimal.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` for a zero, negative or non-finite
/// slope rating, or a non-finite course rating.
pub fn score_differential(
    adjusted_gross_score: i32,
    course_rating: f64,
    slope_rating: f64,
) -> Result<f64, CoreError> {
    check_slope(slope_rating)?;
    if !course_rating.is_finite() {
        return Err(CoreError::invalid(format!(
            "course rating must be finite, got {course_rating}"
        )));
    }
    let raw = (STANDARD_SLOPE / slope_rating) * (f64::from(adjusted_gross_score) - course_rating);
    Ok(round_tenths(raw))
}

/// Strokes a player with `handicap_index` receives on a given tee set.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` for a zero, negative or non-finite slope rating.
pub fn course_handicap(
    handicap_index: f64,
    slope_rating: f64,
    course_rating: f64,
    par: i32,
) -> Result<i32, CoreError> {
    check_slope(slope_rating)?;
    let raw = handicap_index * slope_rating / STANDARD_SLOPE + (course_rating - f64::from(par));
    if !raw.is_finite() {
        return Err(CoreError::invalid("course handicap inputs must be finite"));
    }
    // |raw| is far below i32::MAX for any real course
    Ok(round_half_up(raw) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_goes_half_up() {
        assert!((round_tenths(10.25) - 10.3).abs() < 1e-9);
        assert!((round_tenths(0.15) - 0.2).abs() < 1e-9);
        assert!((round_tenths(-0.25) - -0.2).abs() < 1e-9);
        assert!((round_half_up(12.5) - 13.0).abs() < 1e-9);
    }
}
