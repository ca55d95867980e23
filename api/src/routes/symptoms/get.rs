use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::ServiceError;
use util::state::AppState;
use validator::Validate;

use super::common::{HistoryEntry, HistoryQuery, symptom_service};
use crate::response::{ApiResponse, ErrorResponse};

/// GET /api/symptom-history
///
/// Returns stored checks, most recent first. Without `limit` the configured
/// default cap applies (which may be unbounded).
///
/// ### Query Parameters
/// - `limit` (optional, 1..=1000): maximum number of entries to return.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 7,
///       "symptoms": "fever,chills,headache",
///       "policy": "count_threshold",
///       "risk_level": "High risk",
///       "diagnosis": "High risk of Malaria. Please consult a doctor immediately.",
///       "risk_score": null,
///       "found_symptoms": ["fever", "chills", "headache"],
///       "log_date": "2025-10-15 09:05:03",
///       "created_at": "2025-10-15T09:05:03.120512+00:00"
///     }
///   ],
///   "message": "Symptom history retrieved"
/// }
/// ```
/// - `400 Bad Request` → invalid `limit`
/// - `500 Internal Server Error` → `{ "success": false, "error": "Failed to retrieve symptom history" }`
pub async fn get_symptom_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("limit must be a positive integer")),
        )
            .into_response();
    };

    if let Err(validation_errors) = query.validate() {
        let message = ::common::format_validation_errors(&validation_errors);
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
    }

    match symptom_service(&state).history(query.limit).await {
        Ok(checks) => {
            let entries: Vec<HistoryEntry> = checks.into_iter().map(HistoryEntry::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(entries, "Symptom history retrieved")),
            )
                .into_response()
        }
        Err(ServiceError::StorageUnavailable(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Database connection failed")),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to retrieve symptom history")),
        )
            .into_response(),
    }
}
