//! Coordinates and the great-circle math the geofence checks are built on.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// One international yard, in meters.
pub const METERS_PER_YARD: f64 = 0.9144;

/// A latitude/longitude pair in decimal degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting NaN and infinite components.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if either component is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let coord = Self {
            latitude,
            longitude,
        };
        coord.validate()?;
        Ok(coord)
    }

    /// Builds a coordinate from static data where `(0, 0)` marks an
    /// unconfigured point.
    #[must_use]
    pub fn configured(latitude: f64, longitude: f64) -> Option<Self> {
        let coord = Self {
            latitude,
            longitude,
        };
        if coord.is_placeholder() {
            None
        } else {
            Some(coord)
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if either component is not finite.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(CoreError::invalid(format!(
                "coordinate ({}, {}) is not finite",
                self.latitude, self.longitude
            )))
        }
    }
}

/// Great-circle distance between two points in meters.
///
/// Symmetric, and zero for identical points. Inputs are not range checked;
/// use [`try_haversine_distance_m`] at the edge where sensor data comes in.
#[must_use]
pub fn haversine_distance_m(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// # Errors
///
/// Returns `CoreError::InvalidInput` if either coordinate is not finite.
pub fn try_haversine_distance_m(a: &Coordinate, b: &Coordinate) -> Result<f64, CoreError> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_distance_m(a, b))
}

#[must_use]
pub fn meters_to_yards(meters: f64) -> f64 {
    meters / METERS_PER_YARD
}

#[must_use]
pub fn yards_to_meters(yards: f64) -> f64 {
    yards * METERS_PER_YARD
}

/// Distance in whole yards, rounded to the nearest yard, as shown to a golfer.
#[must_use]
pub fn rounded_yards(meters: f64) -> u32 {
    let yards = meters_to_yards(meters).round();
    if yards <= 0.0 {
        0
    } else if yards >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        // bounded above
        yards as u32
    }
}
