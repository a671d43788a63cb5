use super::resolve::{TURN_HOLE, resolve_zone};
use crate::error::CoreError;
use crate::model::{
    Coordinate, CourseData, FeatureSettings, GeofenceZone, RoundContext, Trigger, ZoneCategory,
    minutes_until,
};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Tee-time alerts fire only inside this many minutes before the tee time.
pub const TEE_ALERT_WINDOW_MINUTES: i64 = 5;

/// Everything one evaluation looks at. The caller builds a fresh snapshot
/// for every location sample.
#[derive(Clone, Debug)]
pub struct EvaluationInput<'a> {
    pub location: Coordinate,
    pub now: DateTime<Utc>,
    pub context: &'a RoundContext,
    pub zones: &'a [GeofenceZone],
    pub settings: FeatureSettings,
}

/// Decides which location event, if any, a sample should raise.
///
/// Holds only the local course layout used when no zones are configured
/// remotely; the engine keeps no per-round state.
#[derive(Clone, Debug, Default)]
pub struct GeofenceEngine {
    course: CourseData,
}

impl GeofenceEngine {
    #[must_use]
    pub fn new(course: CourseData) -> Self {
        Self { course }
    }

    #[must_use]
    pub fn course(&self) -> &CourseData {
        &self.course
    }

    /// Checks run in a fixed order and the first hit wins: master switch,
    /// auto-start, check-in, tee-time alert, turn prompt.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` when the location is not finite.
    pub fn evaluate(&self, input: &EvaluationInput<'_>) -> Result<Trigger, CoreError> {
        input.location.validate()?;

        let trigger = self.first_match(input);
        debug!(
            lat = input.location.latitude,
            lon = input.location.longitude,
            remote_zones = input.zones.len(),
            %trigger,
            "geofence evaluated"
        );
        Ok(trigger)
    }

    fn first_match(&self, input: &EvaluationInput<'_>) -> Trigger {
        if !input.settings.master_enabled {
            return Trigger::None;
        }

        if let Some(trigger) = self.check_auto_start(input) {
            return trigger;
        }
        if let Some(trigger) = self.check_check_in(input) {
            return trigger;
        }
        if let Some(trigger) = self.check_tee_alert(input) {
            return trigger;
        }
        if let Some(trigger) = self.check_turn_prompt(input) {
            return trigger;
        }
        Trigger::None
    }

    fn check_auto_start(&self, input: &EvaluationInput<'_>) -> Option<Trigger> {
        let ctx = input.context;
        if !ctx.checked_in || ctx.round_in_progress {
            return None;
        }
        // remote configuration only
        let first_tee = resolve_zone(input.zones, None, ZoneCategory::HoleTee, Some(1))?;
        first_tee.contains(&input.location).then(|| Trigger::AutoStart {
            zone: first_tee.into_zone(),
        })
    }

    fn check_check_in(&self, input: &EvaluationInput<'_>) -> Option<Trigger> {
        if !input.settings.check_in_enabled || input.context.checked_in {
            return None;
        }
        let clubhouse = resolve_zone(
            input.zones,
            Some(&self.course),
            ZoneCategory::Clubhouse,
            None,
        )?;
        clubhouse.contains(&input.location).then(|| Trigger::CheckIn {
            zone: clubhouse.into_zone(),
        })
    }

    fn check_tee_alert(&self, input: &EvaluationInput<'_>) -> Option<Trigger> {
        if !input.settings.tee_time_alerts_enabled {
            return None;
        }
        let tee_time = input.context.tee_time?;
        // whole minutes are reported, but the window edge is exact: 5m01s is outside
        let minutes = minutes_until(input.now, tee_time);
        if minutes <= 0 || tee_time - input.now > TimeDelta::minutes(TEE_ALERT_WINDOW_MINUTES) {
            return None;
        }
        let range = resolve_zone(
            input.zones,
            Some(&self.course),
            ZoneCategory::PracticeRange,
            None,
        )?;
        range.contains(&input.location).then(|| Trigger::TeeAlert {
            zone: range.into_zone(),
            minutes_until_tee_time: minutes,
        })
    }

    fn check_turn_prompt(&self, input: &EvaluationInput<'_>) -> Option<Trigger> {
        let ctx = input.context;
        if !input.settings.turn_prompt_enabled || ctx.turn_prompt_shown {
            return None;
        }
        if !is_turn_window(ctx.current_hole) {
            return None;
        }
        let green = resolve_zone(
            input.zones,
            Some(&self.course),
            ZoneCategory::HoleGreen,
            Some(TURN_HOLE),
        )?;
        green.contains(&input.location).then(|| Trigger::FnbPrompt {
            zone: green.into_zone(),
            hole_number: TURN_HOLE,
        })
    }
}

/// The hole before the turn green and the turn hole itself.
#[must_use]
pub fn is_turn_window(current_hole: u8) -> bool {
    current_hole == TURN_HOLE - 1 || current_hole == TURN_HOLE
}

/// Evaluates against the built-in course layout.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` when the location is not finite.
pub fn evaluate(input: &EvaluationInput<'_>) -> Result<Trigger, CoreError> {
    GeofenceEngine::default().evaluate(input)
}
