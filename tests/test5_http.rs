mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::web::Data;
use actix_web::App;
use chrono::Duration as ChronoDuration;
use common::*;
use golf_companion::config::{RemoteConfig, ZoneConfigCache};
use golf_companion::controller::{self, AppState};
use golf_companion::geofence::GeofenceEngine;
use golf_companion::mvu::notify::CollectingNotifier;
use golf_companion::storage::{self, MemoryStorage, PlayerLocks};
use scraper::{Html, Selector};
use serde_json::{Value, json};
use std::sync::Arc;

fn state_with(storage: Arc<MemoryStorage>, notifier: Arc<CollectingNotifier>) -> AppState {
    AppState {
        engine: GeofenceEngine::default(),
        config: ZoneConfigCache::with_config(RemoteConfig {
            zones: remote_zones(),
            settings: settings(),
        }),
        storage,
        locks: PlayerLocks::new(),
        notifier,
    }
}

fn state() -> AppState {
    state_with(
        Arc::new(MemoryStorage::new()),
        Arc::new(CollectingNotifier::new()),
    )
}

fn round_body(strokes: i32, days_ago: i64) -> Value {
    let started = fixed_now() - ChronoDuration::days(days_ago);
    let holes = par_four_holes(&vec![Some(strokes); 18]);
    json!({
        "holes": holes,
        "tee": championship_tee(),
        "policy": {"policy": "double_bogey"},
        "started_at": started,
        "finished_at": started + ChronoDuration::minutes(245),
    })
}

#[actix_web::test]
async fn test5_health() {
    let app = test::init_service(App::new().configure(controller::configure)).await;
    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test5_evaluate_returns_tagged_trigger_and_notifies() {
    let notifier = Arc::new(CollectingNotifier::new());
    let app_state = state_with(Arc::new(MemoryStorage::new()), notifier.clone());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(app_state))
            .configure(controller::configure),
    )
    .await;

    let req = TestRequest::post()
        .uri("/geofence/evaluate")
        .set_json(json!({
            "location": clubhouse_center(),
            "now": fixed_now(),
            "player": "ana",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["type"], "check_in");
    assert_eq!(body["zone"]["id"], "clubhouse");
    assert_eq!(notifier.delivered().len(), 1);

    // checked in and far from everything
    let req = TestRequest::post()
        .uri("/geofence/evaluate")
        .set_json(json!({
            "location": north_of(BASE, 5000.0),
            "context": {"checked_in": true},
            "player": "ana",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["type"], "none");
    assert_eq!(notifier.delivered().len(), 1);
}

#[actix_web::test]
async fn test5_evaluate_rejects_bad_location() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(state()))
            .configure(controller::configure),
    )
    .await;
    let req = TestRequest::post()
        .uri("/geofence/evaluate")
        .set_json(json!({"location": {"latitude": "north"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test5_handicap_endpoints() {
    let app = test::init_service(App::new().configure(controller::configure)).await;

    let req = TestRequest::post()
        .uri("/handicap/index")
        .set_json(json!({"differentials": [5.0, 6.0, 7.0]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["handicap_index"], 3.0);
    assert_eq!(body["rounds_used"], 3);

    let req = TestRequest::post()
        .uri("/handicap/index")
        .set_json(json!({"differentials": [5.0]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["handicap_index"].is_null());

    let req = TestRequest::post()
        .uri("/handicap/differential")
        .set_json(json!({"adjusted_gross_score": 90, "course_rating": 72.0, "slope_rating": 113.0}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["differential"], 18.0);

    let req = TestRequest::post()
        .uri("/handicap/differential")
        .set_json(json!({"adjusted_gross_score": 90, "course_rating": 72.0, "slope_rating": 0.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
        .uri("/handicap/course")
        .set_json(json!({"handicap_index": 12.4, "slope_rating": 125.0, "course_rating": 71.5, "par": 72}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["course_handicap"], 13);
}

#[actix_web::test]
async fn test5_rounds_json_and_html() {
    let store = Arc::new(MemoryStorage::new());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(state_with(
                store.clone(),
                Arc::new(CollectingNotifier::new()),
            )))
            .configure(controller::configure),
    )
    .await;

    for (strokes, days_ago) in [(5, 3), (6, 2), (5, 1)] {
        let req = TestRequest::post()
            .uri("/rounds/ana")
            .set_json(round_body(strokes, days_ago))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    // differentials 18, 36, 18: lowest 18 minus 2
    assert_eq!(storage::load_handicap_index(store.as_ref(), "ana").await.unwrap(), Some(16.0));

    let req = TestRequest::get().uri("/rounds/ana?json=1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["player"], "ana");
    assert_eq!(body["handicap_index"], 16.0);
    let rounds = body["rounds"].as_array().expect("rounds array");
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0]["gross_score"], 90);
    assert_eq!(rounds[1]["gross_score"], 108);

    let req = TestRequest::get().uri("/rounds/ana").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = Html::parse_document(std::str::from_utf8(&body).expect("utf-8 page"));

    let tables = Selector::parse("table.scorecard-table").unwrap();
    assert_eq!(html.select(&tables).count(), 3);
    let rows = Selector::parse("tr.scorecard-row").unwrap();
    assert_eq!(html.select(&rows).count(), 54);
    let index = Selector::parse("p.handicap-index").unwrap();
    let text: String = html.select(&index).next().unwrap().text().collect();
    assert!(text.contains("16.0"), "{text}");
    let duration = Selector::parse("p.round-duration").unwrap();
    let text: String = html.select(&duration).next().unwrap().text().collect();
    assert!(text.contains("4h 05m"), "{text}");
}

#[actix_web::test]
async fn test5_empty_history_page() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(state()))
            .configure(controller::configure),
    )
    .await;
    let req = TestRequest::get().uri("/rounds/nobody").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = Html::parse_document(std::str::from_utf8(&body).unwrap());
    let index = Selector::parse("p.handicap-index").unwrap();
    let text: String = html.select(&index).next().unwrap().text().collect();
    assert!(text.contains("N/A"));
    let none = Selector::parse("p.no-rounds").unwrap();
    assert_eq!(html.select(&none).count(), 1);
}

#[actix_web::test]
async fn test5_empty_scorecard_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(state()))
            .configure(controller::configure),
    )
    .await;
    let mut body = round_body(5, 1);
    body["holes"] = json!(par_four_holes(&[]));
    let req = TestRequest::post()
        .uri("/rounds/ana")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
