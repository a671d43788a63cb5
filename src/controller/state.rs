use crate::config::ZoneConfigCache;
use crate::error::CoreError;
use crate::geofence::GeofenceEngine;
use crate::mvu::notify::NotificationSink;
use crate::storage::{PlayerLocks, Storage};
use actix_web::HttpResponse;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: GeofenceEngine,
    pub config: ZoneConfigCache,
    pub storage: Arc<dyn Storage>,
    pub locks: PlayerLocks,
    pub notifier: Arc<dyn NotificationSink>,
}

pub fn error_response(e: &CoreError) -> HttpResponse {
    match e {
        CoreError::InvalidInput(_) | CoreError::Parse(_) => {
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
        CoreError::NotFound(_) => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
        _ => {
            error!(error = %e, "request failed");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
