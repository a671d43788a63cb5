pub mod geofence;
pub mod handicap;
pub mod rounds;
pub mod state;

pub use state::AppState;

use actix_web::{HttpResponse, web};

/// Mounts every route; shared by the binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(HttpResponse::Ok))
        .route("/geofence/evaluate", web::post().to(geofence::evaluate))
        .route("/handicap/index", web::post().to(handicap::index))
        .route("/handicap/differential", web::post().to(handicap::differential))
        .route("/handicap/course", web::post().to(handicap::course))
        .route("/rounds/{player}", web::post().to(rounds::complete))
        .route("/rounds/{player}", web::get().to(rounds::history));
}
