use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use util::state::AppState;

use crate::response::ApiResponse;

/// Builds the `/health` route group.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Reports whether the API is up and the database answers a ping.
///
/// ### Responses
/// - `200 OK` → `{ "success": true, "data": "OK", "message": "Health check passed" }`
/// - `503 Service Unavailable` → `{ "success": false, "data": "", "message": "Database unreachable" }`
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success("OK", "Health check passed")),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the database");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<&str>::error("Database unreachable")),
            )
        }
    }
}
