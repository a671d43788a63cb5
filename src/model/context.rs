use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin toggles for the location features. Missing toggles read as enabled.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureSettings {
    #[serde(alias = "masterEnabled", alias = "geofence_enabled")]
    pub master_enabled: bool,
    #[serde(alias = "checkInEnabled")]
    pub check_in_enabled: bool,
    #[serde(alias = "teeTimeAlertsEnabled")]
    pub tee_time_alerts_enabled: bool,
    #[serde(alias = "turnPromptEnabled")]
    pub turn_prompt_enabled: bool,
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self {
            master_enabled: true,
            check_in_enabled: true,
            tee_time_alerts_enabled: true,
            turn_prompt_enabled: true,
        }
    }
}

impl FeatureSettings {
    #[must_use]
    pub fn all_disabled() -> Self {
        Self {
            master_enabled: false,
            check_in_enabled: false,
            tee_time_alerts_enabled: false,
            turn_prompt_enabled: false,
        }
    }
}

/// Per-round flags owned by the caller and handed to the engine as a snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundContext {
    #[serde(default)]
    pub checked_in: bool,
    #[serde(default)]
    pub round_in_progress: bool,
    #[serde(default = "first_hole")]
    pub current_hole: u8,
    #[serde(default)]
    pub turn_prompt_shown: bool,
    #[serde(default)]
    pub tee_time: Option<DateTime<Utc>>,
}

fn first_hole() -> u8 {
    1
}

impl Default for RoundContext {
    fn default() -> Self {
        Self {
            checked_in: false,
            round_in_progress: false,
            current_hole: first_hole(),
            turn_prompt_shown: false,
            tee_time: None,
        }
    }
}

/// A round the player has started but not finished, saved between app sessions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundProgress {
    pub context: RoundContext,
    pub holes: Vec<super::HoleScore>,
    pub started_at: DateTime<Utc>,
}

/// Saved tee time and whether the practice-range alert already went out for it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeeTimeAlert {
    pub tee_time: DateTime<Utc>,
    #[serde(default)]
    pub has_alerted: bool,
}
