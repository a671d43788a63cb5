use super::state::error_response;
use crate::handicap::{MAX_ROUNDS_CONSIDERED, course_handicap, handicap_index, score_differential};
use actix_web::web::Json;
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct IndexRequest {
    /// Most recent first.
    pub differentials: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct DifferentialRequest {
    pub adjusted_gross_score: i32,
    pub course_rating: f64,
    pub slope_rating: f64,
}

#[derive(Debug, Deserialize)]
pub struct CourseHandicapRequest {
    pub handicap_index: f64,
    pub slope_rating: f64,
    pub course_rating: f64,
    pub par: i32,
}

pub async fn index(body: Json<IndexRequest>) -> impl Responder {
    let rounds_used = body.differentials.len().min(MAX_ROUNDS_CONSIDERED);
    HttpResponse::Ok().json(json!({
        "handicap_index": handicap_index(&body.differentials),
        "rounds_used": rounds_used,
    }))
}

pub async fn differential(body: Json<DifferentialRequest>) -> impl Responder {
    match score_differential(
        body.adjusted_gross_score,
        body.course_rating,
        body.slope_rating,
    ) {
        Ok(d) => HttpResponse::Ok().json(json!({ "differential": d })),
        Err(e) => error_response(&e),
    }
}

pub async fn course(body: Json<CourseHandicapRequest>) -> impl Responder {
    match course_handicap(
        body.handicap_index,
        body.slope_rating,
        body.course_rating,
        body.par,
    ) {
        Ok(ch) => HttpResponse::Ok().json(json!({ "course_handicap": ch })),
        Err(e) => error_response(&e),
    }
}
