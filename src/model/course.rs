//! Static course layout used when no zones are configured remotely.
//!
//! Points that have not been surveyed yet are `None`. JSON overrides may
//! still carry them as `(0, 0)`; those deserialize to `None` as well.

use super::geo::{Coordinate, haversine_distance_m, rounded_yards};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NamedPlace {
    pub name: String,
    #[serde(default, deserialize_with = "placeholder_as_none")]
    pub center: Option<Coordinate>,
    pub radius_meters: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleLayout {
    pub number: u8,
    pub par: i32,
    pub stroke_index: u8,
    #[serde(default, deserialize_with = "placeholder_as_none")]
    pub tee: Option<Coordinate>,
    #[serde(default, deserialize_with = "placeholder_as_none")]
    pub green: Option<Coordinate>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CourseData {
    pub name: String,
    pub clubhouse: NamedPlace,
    pub practice_range: NamedPlace,
    pub canteen: NamedPlace,
    pub holes: Vec<HoleLayout>,
}

fn placeholder_as_none<'de, D>(deserializer: D) -> Result<Option<Coordinate>, D::Error>
where
    D: Deserializer<'de>,
{
    let coord: Option<Coordinate> = Option::deserialize(deserializer)?;
    Ok(coord.filter(|c| !c.is_placeholder()))
}

// (number, par, stroke index, tee lat/lon, green lat/lon); 0.0 pairs are unsurveyed
const BUILT_IN_HOLES: [(u8, i32, u8, (f64, f64), (f64, f64)); 18] = [
    (1, 4, 7, (51.40210, -0.30050), (51.40480, -0.30120)),
    (2, 5, 1, (51.40510, -0.30170), (51.40890, -0.30420)),
    (3, 3, 17, (51.40920, -0.30480), (51.41030, -0.30610)),
    (4, 4, 5, (51.41060, -0.30650), (51.41270, -0.30910)),
    (5, 4, 11, (51.41300, -0.30950), (51.41150, -0.31240)),
    (6, 3, 15, (51.41120, -0.31280), (51.41010, -0.31400)),
    (7, 5, 3, (51.40980, -0.31430), (51.40620, -0.31550)),
    (8, 4, 9, (51.40590, -0.31520), (51.40340, -0.31260)),
    (9, 4, 13, (51.40310, -0.31200), (51.40190, -0.30890)),
    (10, 4, 8, (51.40170, -0.30820), (51.39920, -0.30700)),
    (11, 3, 16, (51.39890, -0.30660), (51.39790, -0.30520)),
    (12, 5, 2, (51.39760, -0.30480), (51.39420, -0.30260)),
    (13, 4, 10, (0.0, 0.0), (0.0, 0.0)),
    (14, 4, 6, (0.0, 0.0), (0.0, 0.0)),
    (15, 3, 18, (0.0, 0.0), (0.0, 0.0)),
    (16, 4, 12, (0.0, 0.0), (0.0, 0.0)),
    (17, 5, 4, (0.0, 0.0), (0.0, 0.0)),
    (18, 4, 14, (0.0, 0.0), (0.0, 0.0)),
];

impl CourseData {
    /// The layout compiled into the app.
    #[must_use]
    pub fn built_in() -> Self {
        let holes = BUILT_IN_HOLES
            .iter()
            .map(|&(number, par, stroke_index, tee, green)| HoleLayout {
                number,
                par,
                stroke_index,
                tee: Coordinate::configured(tee.0, tee.1),
                green: Coordinate::configured(green.0, green.1),
            })
            .collect();

        Self {
            name: "Home Course".to_string(),
            clubhouse: NamedPlace {
                name: "Clubhouse".to_string(),
                center: Coordinate::configured(51.40120, -0.29980),
                radius_meters: 50.0,
            },
            practice_range: NamedPlace {
                name: "Practice Range".to_string(),
                center: Coordinate::configured(51.40050, -0.30210),
                radius_meters: 80.0,
            },
            canteen: NamedPlace {
                name: "Canteen".to_string(),
                center: Coordinate::configured(0.0, 0.0),
                radius_meters: 30.0,
            },
            holes,
        }
    }

    /// # Errors
    ///
    /// Returns the `serde_json` error when the document does not match the layout.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&HoleLayout> {
        self.holes.iter().find(|h| h.number == number)
    }

    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    /// Yards from `point` to the middle of the given green, if it has been surveyed.
    #[must_use]
    pub fn distance_to_green_yards(&self, point: &Coordinate, hole_number: u8) -> Option<u32> {
        let green = self.hole(hole_number)?.green?;
        Some(rounded_yards(haversine_distance_m(point, &green)))
    }
}

impl Default for CourseData {
    fn default() -> Self {
        Self::built_in()
    }
}
