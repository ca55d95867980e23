//! Symptom analysis and history routes.
//!
//! - `POST /analyze-symptoms` → score, persist, respond
//! - `GET /symptom-history` → recent checks, newest first

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

pub fn symptom_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze-symptoms", post(post::analyze_symptoms))
        .route("/symptom-history", get(get::get_symptom_history))
}
