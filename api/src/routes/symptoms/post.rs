use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::ServiceError;
use util::state::AppState;

use super::common::{AnalyzeRequest, AnalyzeResponse, symptom_service};
use crate::response::ErrorResponse;

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// POST /api/analyze-symptoms
///
/// Scores the submitted symptoms with the configured policy and records the
/// check in history. The result is only returned once it has been stored.
///
/// ### Request Body
/// ```json
/// { "symptoms": ["fever", "chills", "headache"] }
/// ```
/// or
/// ```json
/// { "symptoms": "I have a fever and chills" }
/// ```
///
/// ### Responses
/// - `200 OK` with an [`AnalyzeResponse`]
/// - `400 Bad Request` → `{ "success": false, "error": "Missing symptoms data" }`
/// - `400 Bad Request` → `{ "success": false, "error": "Invalid symptoms data: ..." }`
/// - `500 Internal Server Error` → `{ "success": false, "error": "Database connection failed" }`
/// - `500 Internal Server Error` → `{ "success": false, "error": "Failed to save symptom log" }`
pub async fn analyze_symptoms(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "rejected analyze body");
            return error(
                StatusCode::BAD_REQUEST,
                "Invalid symptoms data: expected a string or a list of strings",
            );
        }
    };

    let Some(symptoms) = req.symptoms else {
        return error(StatusCode::BAD_REQUEST, "Missing symptoms data");
    };

    match symptom_service(&state).analyze(symptoms).await {
        Ok(analysis) => (
            StatusCode::OK,
            Json(AnalyzeResponse::from(analysis.classification)),
        )
            .into_response(),
        Err(ServiceError::StorageUnavailable(_)) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Database connection failed")
        }
        Err(_) => error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save symptom log"),
    }
}
