#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use golf_companion::model::{
    Coordinate, FeatureSettings, GeofenceZone, HoleScore, RoundContext, TeeSet, TriggerAction,
    ZoneCategory,
};

pub const BASE: Coordinate = Coordinate {
    latitude: 1.3000,
    longitude: 103.8000,
};

/// Roughly `meters` due north of `c`.
pub fn north_of(c: Coordinate, meters: f64) -> Coordinate {
    Coordinate {
        latitude: c.latitude + meters / 111_195.0,
        longitude: c.longitude,
    }
}

pub fn zone(
    id: &str,
    category: ZoneCategory,
    hole_number: Option<u8>,
    center: Coordinate,
    radius_meters: f64,
    trigger_action: Option<TriggerAction>,
) -> GeofenceZone {
    GeofenceZone {
        id: id.to_string(),
        name: id.to_string(),
        category,
        hole_number,
        center,
        radius_meters,
        trigger_action,
        active: true,
    }
}

pub fn clubhouse_center() -> Coordinate {
    BASE
}

pub fn first_tee_center() -> Coordinate {
    north_of(BASE, 30.0)
}

pub fn range_center() -> Coordinate {
    north_of(BASE, 500.0)
}

pub fn turn_green_center() -> Coordinate {
    north_of(BASE, 1500.0)
}

/// Admin zones: the first tee sits inside the clubhouse circle.
pub fn remote_zones() -> Vec<GeofenceZone> {
    vec![
        zone(
            "clubhouse",
            ZoneCategory::Clubhouse,
            None,
            clubhouse_center(),
            50.0,
            Some(TriggerAction::CheckIn),
        ),
        zone(
            "tee-1",
            ZoneCategory::HoleTee,
            Some(1),
            first_tee_center(),
            25.0,
            Some(TriggerAction::AutoStart),
        ),
        zone(
            "range",
            ZoneCategory::PracticeRange,
            None,
            range_center(),
            60.0,
            Some(TriggerAction::TeeAlert),
        ),
        zone(
            "green-8",
            ZoneCategory::HoleGreen,
            Some(8),
            turn_green_center(),
            30.0,
            Some(TriggerAction::FnbPrompt),
        ),
    ]
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 14, 8, 0, 0)
        .single()
        .expect("valid fixed date")
}

pub fn ctx() -> RoundContext {
    RoundContext::default()
}

pub fn settings() -> FeatureSettings {
    FeatureSettings::default()
}

pub fn championship_tee() -> TeeSet {
    TeeSet {
        name: "Blue".to_string(),
        course_rating: 72.0,
        slope_rating: 113.0,
        par: 72,
    }
}

/// Eighteen par-4 holes with stroke indexes 1..=18 and the given strokes.
pub fn par_four_holes(strokes: &[Option<i32>]) -> Vec<HoleScore> {
    (1..=18u8)
        .map(|n| {
            HoleScore::new(n, 4, strokes.get(usize::from(n) - 1).copied().flatten())
                .with_stroke_index(n)
        })
        .collect()
}
