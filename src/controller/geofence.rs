use super::state::{AppState, error_response};
use crate::geofence::EvaluationInput;
use crate::model::{Coordinate, RoundContext};
use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub location: Coordinate,
    /// Defaults to the server clock.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
    #[serde(default)]
    pub context: RoundContext,
    /// When set, fired triggers are also pushed to this player.
    #[serde(default)]
    pub player: Option<String>,
}

/// Evaluates one location sample against the current zone configuration.
pub async fn evaluate(body: Json<EvaluateRequest>, state: Data<AppState>) -> impl Responder {
    let req = body.into_inner();
    let config = state.config.snapshot().await;
    let input = EvaluationInput {
        location: req.location,
        now: req.now.unwrap_or_else(Utc::now),
        context: &req.context,
        zones: &config.zones,
        settings: config.settings,
    };

    match state.engine.evaluate(&input) {
        Ok(trigger) => {
            if let Some(player) = req.player.as_deref().filter(|_| !trigger.is_none()) {
                state.notifier.notify(player, &trigger);
            }
            HttpResponse::Ok().json(trigger)
        }
        Err(e) => error_response(&e),
    }
}
