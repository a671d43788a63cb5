use super::zone::GeofenceZone;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one geofence evaluation. Exactly one variant per call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    None,
    CheckIn {
        zone: GeofenceZone,
    },
    TeeAlert {
        zone: GeofenceZone,
        minutes_until_tee_time: i64,
    },
    FnbPrompt {
        zone: GeofenceZone,
        hole_number: u8,
    },
    AutoStart {
        zone: GeofenceZone,
    },
}

impl Trigger {
    #[must_use]
    pub fn zone(&self) -> Option<&GeofenceZone> {
        match self {
            Trigger::None => None,
            Trigger::CheckIn { zone }
            | Trigger::TeeAlert { zone, .. }
            | Trigger::FnbPrompt { zone, .. }
            | Trigger::AutoStart { zone } => Some(zone),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Trigger::None)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::None => write!(f, "none"),
            Trigger::CheckIn { zone } => write!(f, "check_in at {}", zone.name),
            Trigger::TeeAlert {
                zone,
                minutes_until_tee_time,
            } => write!(
                f,
                "tee_alert at {} ({minutes_until_tee_time} min)",
                zone.name
            ),
            Trigger::FnbPrompt { zone, hole_number } => {
                write!(f, "fnb_prompt at {} (hole {hole_number})", zone.name)
            }
            Trigger::AutoStart { zone } => write!(f, "auto_start at {}", zone.name),
        }
    }
}
