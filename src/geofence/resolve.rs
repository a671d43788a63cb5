use crate::model::{
    CourseData, Coordinate, GeofenceZone, NamedPlace, TriggerAction, ZoneCategory,
    haversine_distance_m, resolve_zone_configured, rounded_yards, within_zone, yards_to_meters,
};
use std::borrow::Cow;

/// The hole whose green doubles as the halfway-house stop.
pub const TURN_HOLE: u8 = 8;

/// How close to the turn green, in yards, counts as arriving when only the
/// local course layout is available.
pub const TURN_GREEN_YARDS: u32 = 30;

pub const LOCAL_TEE_RADIUS_M: f64 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneOrigin {
    Remote,
    Local,
}

#[derive(Clone, Debug)]
pub struct ResolvedZone<'a> {
    pub zone: Cow<'a, GeofenceZone>,
    pub origin: ZoneOrigin,
}

impl ResolvedZone<'_> {
    /// Local greens are measured in whole yards to the middle of the green,
    /// everything else by the zone radius.
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        match (self.origin, self.zone.category) {
            (ZoneOrigin::Local, ZoneCategory::HoleGreen) => {
                rounded_yards(haversine_distance_m(point, &self.zone.center)) <= TURN_GREEN_YARDS
            }
            _ => within_zone(point, &self.zone),
        }
    }

    #[must_use]
    pub fn into_zone(self) -> GeofenceZone {
        self.zone.into_owned()
    }
}

/// Finds the zone of `category` (and `hole_number`, when given).
///
/// Remote zones win whenever any are configured; a missing match among them
/// is final. Only a completely empty remote list falls through to `local`,
/// and only for points that have actually been surveyed.
#[must_use]
pub fn resolve_zone<'a>(
    remote: &'a [GeofenceZone],
    local: Option<&CourseData>,
    category: ZoneCategory,
    hole_number: Option<u8>,
) -> Option<ResolvedZone<'a>> {
    if !remote.is_empty() {
        return remote
            .iter()
            .find(|z| z.active && z.matches(category, hole_number))
            .map(|zone| ResolvedZone {
                zone: Cow::Borrowed(zone),
                origin: ZoneOrigin::Remote,
            });
    }

    let zone = local_zone(local?, category, hole_number)?;
    if !resolve_zone_configured(&zone) {
        return None;
    }
    Some(ResolvedZone {
        zone: Cow::Owned(zone),
        origin: ZoneOrigin::Local,
    })
}

fn local_zone(
    course: &CourseData,
    category: ZoneCategory,
    hole_number: Option<u8>,
) -> Option<GeofenceZone> {
    match category {
        ZoneCategory::Clubhouse => place_zone(
            &course.clubhouse,
            category,
            "local-clubhouse",
            Some(TriggerAction::CheckIn),
        ),
        ZoneCategory::PracticeRange => place_zone(
            &course.practice_range,
            category,
            "local-practice-range",
            Some(TriggerAction::TeeAlert),
        ),
        ZoneCategory::Canteen => place_zone(&course.canteen, category, "local-canteen", None),
        ZoneCategory::HoleGreen => {
            let hole = course.hole(hole_number?)?;
            Some(GeofenceZone {
                id: format!("local-hole-{}-green", hole.number),
                name: format!("Hole {} Green", hole.number),
                category,
                hole_number: Some(hole.number),
                center: hole.green?,
                radius_meters: yards_to_meters(f64::from(TURN_GREEN_YARDS)),
                trigger_action: (hole.number == TURN_HOLE).then_some(TriggerAction::FnbPrompt),
                active: true,
            })
        }
        ZoneCategory::HoleTee => {
            let hole = course.hole(hole_number?)?;
            Some(GeofenceZone {
                id: format!("local-hole-{}-tee", hole.number),
                name: format!("Hole {} Tee", hole.number),
                category,
                hole_number: Some(hole.number),
                center: hole.tee?,
                radius_meters: LOCAL_TEE_RADIUS_M,
                trigger_action: (hole.number == 1).then_some(TriggerAction::AutoStart),
                active: true,
            })
        }
    }
}

fn place_zone(
    place: &NamedPlace,
    category: ZoneCategory,
    id: &str,
    trigger_action: Option<TriggerAction>,
) -> Option<GeofenceZone> {
    Some(GeofenceZone {
        id: id.to_string(),
        name: place.name.clone(),
        category,
        hole_number: None,
        center: place.center?,
        radius_meters: place.radius_meters,
        trigger_action,
        active: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_clubhouse() -> GeofenceZone {
        GeofenceZone {
            id: "z1".to_string(),
            name: "Main Clubhouse".to_string(),
            category: ZoneCategory::Clubhouse,
            hole_number: None,
            center: Coordinate {
                latitude: 10.0,
                longitude: 10.0,
            },
            radius_meters: 40.0,
            trigger_action: Some(TriggerAction::CheckIn),
            active: true,
        }
    }

    #[test]
    fn remote_list_blocks_local_fallback() {
        let course = CourseData::built_in();
        let remote = vec![remote_clubhouse()];
        let found = resolve_zone(&remote, Some(&course), ZoneCategory::PracticeRange, None);
        assert!(found.is_none());

        let found = resolve_zone(&remote, Some(&course), ZoneCategory::Clubhouse, None).unwrap();
        assert_eq!(found.origin, ZoneOrigin::Remote);
        assert_eq!(found.zone.id, "z1");
    }

    #[test]
    fn inactive_remote_zones_are_skipped() {
        let mut zone = remote_clubhouse();
        zone.active = false;
        let remote = vec![zone];
        assert!(resolve_zone(&remote, None, ZoneCategory::Clubhouse, None).is_none());
    }

    #[test]
    fn unsurveyed_local_points_never_resolve() {
        let course = CourseData::built_in();
        assert!(resolve_zone(&[], Some(&course), ZoneCategory::Canteen, None).is_none());
        assert!(resolve_zone(&[], Some(&course), ZoneCategory::HoleGreen, Some(14)).is_none());
        assert!(resolve_zone(&[], None, ZoneCategory::Clubhouse, None).is_none());
    }

    #[test]
    fn local_turn_green_is_synthesized() {
        let course = CourseData::built_in();
        let found =
            resolve_zone(&[], Some(&course), ZoneCategory::HoleGreen, Some(TURN_HOLE)).unwrap();
        assert_eq!(found.origin, ZoneOrigin::Local);
        assert_eq!(found.zone.hole_number, Some(8));
        assert_eq!(found.zone.trigger_action, Some(TriggerAction::FnbPrompt));
    }
}
