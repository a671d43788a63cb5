use super::state::{AppState, error_response};
use crate::error::CoreError;
use crate::handicap::{MaxScorePolicy, complete_round, course_handicap};
use crate::model::{HoleScore, RoundRecord, TeeSet};
use crate::storage;
use crate::view::scorecard::render_scorecard_page;
use actix_web::web::{self, Data, Json};
use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct CompleteRoundRequest {
    pub holes: Vec<HoleScore>,
    pub tee: TeeSet,
    /// When absent, net double bogey is used if the player has a stored
    /// handicap index, plain double bogey otherwise.
    #[serde(default)]
    pub policy: Option<MaxScorePolicy>,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteRoundResponse {
    pub record: RoundRecord,
    pub handicap_index: Option<f64>,
}

/// Records a finished round and refreshes the player's handicap index.
pub async fn complete(
    path: web::Path<String>,
    body: Json<CompleteRoundRequest>,
    state: Data<AppState>,
) -> impl Responder {
    let player = path.into_inner();
    match complete_for_player(&player, body.into_inner(), &state).await {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(e) => error_response(&e),
    }
}

async fn complete_for_player(
    player: &str,
    req: CompleteRoundRequest,
    state: &AppState,
) -> Result<CompleteRoundResponse, CoreError> {
    let store = state.storage.as_ref();
    let policy = match req.policy {
        Some(policy) => policy,
        None => match storage::load_handicap_index(store, player).await? {
            Some(index) => MaxScorePolicy::NetDoubleBogey {
                course_handicap: course_handicap(
                    index,
                    req.tee.slope_rating,
                    req.tee.course_rating,
                    req.tee.par,
                )?,
            },
            None => MaxScorePolicy::DoubleBogey,
        },
    };

    let finished_at = req.finished_at.unwrap_or_else(Utc::now);
    let record = complete_round(&req.holes, &req.tee, policy, req.started_at, finished_at)?;
    let (history, handicap_index) =
        storage::record_round_history(store, &state.locks, player, record.clone()).await?;
    storage::clear_round_in_progress(store, player).await?;

    info!(player, rounds = history.len(), ?handicap_index, "round stored");
    Ok(CompleteRoundResponse {
        record,
        handicap_index,
    })
}

/// Scorecards for a player as HTML, or JSON with `?json=1`.
pub async fn history(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let player = path.into_inner();

    let json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };

    let store = state.storage.as_ref();
    let loaded = async {
        let history = storage::load_round_history(store, &player).await?;
        let index = storage::load_handicap_index(store, &player).await?;
        Ok::<_, CoreError>((history, index))
    }
    .await;

    match loaded {
        Ok((history, index)) => {
            if json {
                HttpResponse::Ok().json(json!({
                    "player": player,
                    "handicap_index": index,
                    "rounds": history,
                }))
            } else {
                let markup = render_scorecard_page(&player, &history, index);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => error_response(&e),
    }
}
