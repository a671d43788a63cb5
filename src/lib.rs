pub mod args;
pub mod config;
pub mod controller;
pub mod error;
pub mod geofence;
pub mod handicap;
pub mod model;
pub mod mvu;
pub mod storage;
pub mod view;

pub use error::CoreError;
pub use geofence::{EvaluationInput, GeofenceEngine, evaluate};
pub use handicap::{
    MaxScorePolicy, course_handicap, equitable_stroke_control_adjusted_score, handicap_index,
    score_differential,
};
pub use model::{Coordinate, FeatureSettings, GeofenceZone, RoundContext, Trigger};
