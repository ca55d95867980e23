//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness and database reachability
//! - `/analyze-symptoms`, `/symptom-history` → symptom scoring and history

use crate::routes::{health::health_routes, symptoms::symptom_routes};
use axum::Router;
use util::state::AppState;

pub mod health;
pub mod symptoms;

/// Builds the router for every endpoint under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(symptom_routes())
        .with_state(app_state)
}
