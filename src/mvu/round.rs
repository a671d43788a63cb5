use super::notify::NotificationSink;
use crate::config::ZoneConfigCache;
use crate::error::CoreError;
use crate::geofence::{EvaluationInput, GeofenceEngine};
use crate::handicap::{MaxScorePolicy, complete_round};
use crate::model::{
    Coordinate, HoleScore, RoundContext, RoundProgress, RoundRecord, TeeSet, TeeTimeAlert,
    Trigger,
};
use crate::storage::{self, PlayerLocks, Storage};
use chrono::{DateTime, Utc};
use std::time::Duration;

pub const LAST_HOLE: u8 = 18;

/// Sample interval while the player is on site.
pub const CHECKED_IN_INTERVAL: Duration = Duration::from_secs(5);
/// Sample interval before check-in.
pub const IDLE_INTERVAL: Duration = Duration::from_secs(30);

/// Caller-side state for one player's day at the course. The geofence engine
/// only ever sees snapshots of this.
#[derive(Debug, Clone)]
pub struct RoundModel {
    pub player: String,
    pub context: RoundContext,
    pub has_alerted: bool,
    pub holes: Vec<HoleScore>,
    pub started_at: Option<DateTime<Utc>>,
    pub last_trigger: Option<Trigger>,
    pub completed: Option<RoundRecord>,
    pub handicap_index: Option<f64>,
    pub error: Option<CoreError>,
}

impl RoundModel {
    #[must_use]
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            context: RoundContext::default(),
            has_alerted: false,
            holes: Vec::new(),
            started_at: None,
            last_trigger: None,
            completed: None,
            handicap_index: None,
            error: None,
        }
    }

    /// Restores a model from saved state.
    #[must_use]
    pub fn resume(
        player: impl Into<String>,
        progress: Option<RoundProgress>,
        alert: Option<TeeTimeAlert>,
    ) -> Self {
        let mut model = Self::new(player);
        if let Some(progress) = progress {
            model.context = progress.context;
            model.holes = progress.holes;
            model.started_at = Some(progress.started_at);
        }
        if let Some(alert) = alert {
            model.context.tee_time = Some(alert.tee_time);
            model.has_alerted = alert.has_alerted;
        }
        model
    }

    /// The snapshot handed to the engine. Once the tee-time alert has gone
    /// out the tee time is withheld so it cannot fire again.
    #[must_use]
    pub fn engine_context(&self) -> RoundContext {
        let mut ctx = self.context.clone();
        if self.has_alerted {
            ctx.tee_time = None;
        }
        ctx
    }

    #[must_use]
    pub fn location_interval(&self) -> Duration {
        if self.context.checked_in {
            CHECKED_IN_INTERVAL
        } else {
            IDLE_INTERVAL
        }
    }

    #[must_use]
    pub fn progress(&self) -> Option<RoundProgress> {
        self.started_at.map(|started_at| RoundProgress {
            context: self.context.clone(),
            holes: self.holes.clone(),
            started_at,
        })
    }

    #[must_use]
    pub fn tee_time_alert(&self) -> Option<TeeTimeAlert> {
        self.context.tee_time.map(|tee_time| TeeTimeAlert {
            tee_time,
            has_alerted: self.has_alerted,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    LocationSample {
        location: Coordinate,
        at: DateTime<Utc>,
    },
    TriggerFired {
        trigger: Trigger,
        at: DateTime<Utc>,
    },
    RoundStarted {
        holes: Vec<HoleScore>,
        at: DateTime<Utc>,
    },
    TeeTimeSet(Option<DateTime<Utc>>),
    HoleAdvanced(u8),
    ScoreEntered {
        hole_number: u8,
        strokes: i32,
    },
    RoundFinished {
        tee: TeeSet,
        policy: MaxScorePolicy,
        at: DateTime<Utc>,
    },
    RoundRecorded {
        record: RoundRecord,
        handicap_index: Option<f64>,
    },
    Saved,
    Failed(CoreError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    Evaluate {
        location: Coordinate,
        at: DateTime<Utc>,
    },
    Notify(Trigger),
    StartRound {
        at: DateTime<Utc>,
    },
    PersistRound,
    PersistTeeAlert,
    ClearRound,
    RecordRound {
        tee: TeeSet,
        policy: MaxScorePolicy,
        at: DateTime<Utc>,
    },
}

pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::LocationSample { location, at } => vec![Effect::Evaluate { location, at }],
        Msg::TriggerFired { trigger, at } => apply_trigger(model, trigger, at),
        Msg::RoundStarted { holes, at } => {
            if model.holes.is_empty() {
                model.holes = holes;
            }
            model.started_at.get_or_insert(at);
            vec![Effect::PersistRound]
        }
        Msg::TeeTimeSet(tee_time) => {
            model.context.tee_time = tee_time;
            model.has_alerted = false;
            vec![Effect::PersistTeeAlert]
        }
        Msg::HoleAdvanced(hole) => {
            model.context.current_hole = hole.clamp(1, LAST_HOLE);
            vec![Effect::PersistRound]
        }
        Msg::ScoreEntered {
            hole_number,
            strokes,
        } => match model.holes.iter_mut().find(|h| h.hole_number == hole_number) {
            Some(hole) => {
                hole.strokes = Some(strokes);
                vec![Effect::PersistRound]
            }
            None => {
                model.error = Some(CoreError::NotFound(format!(
                    "hole {hole_number} is not on the scorecard"
                )));
                vec![]
            }
        },
        Msg::RoundFinished { tee, policy, at } => {
            if model.started_at.is_none() {
                model.error = Some(CoreError::invalid("no round in progress"));
                vec![]
            } else {
                vec![Effect::RecordRound { tee, policy, at }]
            }
        }
        Msg::RoundRecorded {
            record,
            handicap_index,
        } => {
            model.completed = Some(record);
            model.handicap_index = handicap_index;
            model.context.round_in_progress = false;
            model.context.turn_prompt_shown = false;
            model.context.current_hole = 1;
            model.holes.clear();
            model.started_at = None;
            vec![Effect::ClearRound]
        }
        Msg::Saved => vec![],
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

/// Records what the trigger means for this player so the same event does
/// not fire on the next sample.
fn apply_trigger(model: &mut RoundModel, trigger: Trigger, at: DateTime<Utc>) -> Vec<Effect> {
    let mut effects = match &trigger {
        Trigger::None => return vec![],
        Trigger::CheckIn { .. } => {
            model.context.checked_in = true;
            vec![Effect::PersistRound]
        }
        Trigger::TeeAlert { .. } => {
            model.has_alerted = true;
            vec![Effect::PersistTeeAlert]
        }
        Trigger::FnbPrompt { .. } => {
            model.context.turn_prompt_shown = true;
            vec![Effect::PersistRound]
        }
        Trigger::AutoStart { .. } => {
            model.context.round_in_progress = true;
            model.context.current_hole = 1;
            model.context.turn_prompt_shown = false;
            vec![Effect::StartRound { at }]
        }
    };
    model.last_trigger = Some(trigger.clone());
    effects.insert(0, Effect::Notify(trigger));
    effects
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub engine: &'a GeofenceEngine,
    pub config: &'a ZoneConfigCache,
    pub storage: &'a dyn Storage,
    pub locks: &'a PlayerLocks,
    pub notifier: &'a dyn NotificationSink,
}

pub async fn run_effect(effect: Effect, model: &RoundModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::Evaluate { location, at } => {
            let config = deps.config.snapshot().await;
            let context = model.engine_context();
            let input = EvaluationInput {
                location,
                now: at,
                context: &context,
                zones: &config.zones,
                settings: config.settings,
            };
            match deps.engine.evaluate(&input) {
                Ok(trigger) => Msg::TriggerFired { trigger, at },
                Err(e) => Msg::Failed(e),
            }
        }
        Effect::Notify(trigger) => {
            deps.notifier.notify(&model.player, &trigger);
            Msg::Saved
        }
        Effect::StartRound { at } => {
            let holes = deps
                .engine
                .course()
                .holes
                .iter()
                .map(|h| HoleScore::new(h.number, h.par, None).with_stroke_index(h.stroke_index))
                .collect();
            Msg::RoundStarted { holes, at }
        }
        Effect::PersistRound => match model.progress() {
            Some(progress) => {
                match storage::save_round_in_progress(deps.storage, &model.player, &progress).await
                {
                    Ok(()) => Msg::Saved,
                    Err(e) => Msg::Failed(e.into()),
                }
            }
            None => Msg::Saved,
        },
        Effect::PersistTeeAlert => {
            let result = match model.tee_time_alert() {
                Some(alert) => storage::save_tee_time_alert(deps.storage, &model.player, &alert).await,
                None => storage::clear_tee_time_alert(deps.storage, &model.player).await,
            };
            match result {
                Ok(()) => Msg::Saved,
                Err(e) => Msg::Failed(e.into()),
            }
        }
        Effect::ClearRound => {
            match storage::clear_round_in_progress(deps.storage, &model.player).await {
                Ok(()) => Msg::Saved,
                Err(e) => Msg::Failed(e.into()),
            }
        }
        Effect::RecordRound { tee, policy, at } => {
            match record_round(model, &tee, policy, at, deps).await {
                Ok((record, handicap_index)) => Msg::RoundRecorded {
                    record,
                    handicap_index,
                },
                Err(e) => Msg::Failed(e),
            }
        }
    }
}

async fn record_round(
    model: &RoundModel,
    tee: &TeeSet,
    policy: MaxScorePolicy,
    at: DateTime<Utc>,
    deps: Deps<'_>,
) -> Result<(RoundRecord, Option<f64>), CoreError> {
    let started_at = model
        .started_at
        .ok_or_else(|| CoreError::invalid("no round in progress"))?;
    let record = complete_round(&model.holes, tee, policy, started_at, at)?;
    let (_, index) =
        storage::record_round_history(deps.storage, deps.locks, &model.player, record.clone())
            .await?;
    Ok((record, index))
}
