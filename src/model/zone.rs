use super::geo::{Coordinate, haversine_distance_m};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ZoneCategory {
    Clubhouse,
    #[serde(alias = "practice-range")]
    PracticeRange,
    Canteen,
    #[serde(alias = "hole-green")]
    HoleGreen,
    #[serde(alias = "hole-tee")]
    HoleTee,
}

impl fmt::Display for ZoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ZoneCategory::Clubhouse => "clubhouse",
            ZoneCategory::PracticeRange => "practice_range",
            ZoneCategory::Canteen => "canteen",
            ZoneCategory::HoleGreen => "hole_green",
            ZoneCategory::HoleTee => "hole_tee",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    CheckIn,
    TeeAlert,
    FnbPrompt,
    AutoStart,
}

/// A named circular region on the course.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeofenceZone {
    pub id: String,
    pub name: String,
    #[serde(alias = "zone_type", alias = "type")]
    pub category: ZoneCategory,
    #[serde(default)]
    pub hole_number: Option<u8>,
    pub center: Coordinate,
    pub radius_meters: f64,
    #[serde(default)]
    pub trigger_action: Option<TriggerAction>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl GeofenceZone {
    #[must_use]
    pub fn matches(&self, category: ZoneCategory, hole_number: Option<u8>) -> bool {
        self.category == category && (hole_number.is_none() || self.hole_number == hole_number)
    }
}

/// True when `point` lies inside the zone's circle (boundary included).
///
/// No placeholder handling here: unconfigured centers are filtered before
/// a zone ever reaches this check.
#[must_use]
pub fn within_zone(point: &Coordinate, zone: &GeofenceZone) -> bool {
    haversine_distance_m(point, &zone.center) <= zone.radius_meters
}

/// False for zones still sitting on the `(0, 0)` placeholder.
#[must_use]
pub fn resolve_zone_configured(zone: &GeofenceZone) -> bool {
    !zone.center.is_placeholder()
}
