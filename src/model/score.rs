use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Strokes for one hole. `strokes` stays empty until the golfer enters it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleScore {
    pub hole_number: u8,
    pub par: i32,
    #[serde(default)]
    pub strokes: Option<i32>,
    #[serde(default)]
    pub adjusted_strokes: Option<i32>,
    /// Difficulty ranking of the hole, 1 (hardest) through 18.
    #[serde(default, alias = "handicap")]
    pub stroke_index: Option<u8>,
}

impl HoleScore {
    #[must_use]
    pub fn new(hole_number: u8, par: i32, strokes: Option<i32>) -> Self {
        Self {
            hole_number,
            par,
            strokes,
            adjusted_strokes: None,
            stroke_index: None,
        }
    }

    #[must_use]
    pub fn with_stroke_index(mut self, stroke_index: u8) -> Self {
        self.stroke_index = Some(stroke_index);
        self
    }

    #[must_use]
    pub fn score_display(&self) -> Option<ScoreDisplay> {
        self.strokes.map(|s| ScoreDisplay::from(s - self.par))
    }
}

/// The tee set a round was played from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeeSet {
    pub name: String,
    pub course_rating: f64,
    pub slope_rating: f64,
    pub par: i32,
}

/// A finished round. Written once when the round is completed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundRecord {
    pub tee_set: String,
    pub gross_score: i32,
    pub adjusted_gross_score: i32,
    pub course_rating: f64,
    pub slope_rating: f64,
    pub differential: f64,
    pub holes: Vec<HoleScore>,
    pub duration_minutes: i64,
    pub completed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogey,
    Other,
}

impl ScoreDisplay {
    /// Maps strokes relative to par onto the usual names.
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            i32::MIN..=-4 => ScoreDisplay::Condor,
            -3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            3 => ScoreDisplay::TripleBogey,
            4 => ScoreDisplay::QuadrupleBogey,
            _ => ScoreDisplay::Other,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreDisplay::Condor => "condor",
            ScoreDisplay::Albatross => "albatross",
            ScoreDisplay::Eagle => "eagle",
            ScoreDisplay::Birdie => "birdie",
            ScoreDisplay::Par => "par",
            ScoreDisplay::Bogey => "bogey",
            ScoreDisplay::DoubleBogey => "double-bogey",
            ScoreDisplay::TripleBogey => "triple-bogey",
            ScoreDisplay::QuadrupleBogey => "quadruple-bogey",
            ScoreDisplay::Other => "other",
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}
