pub mod middleware;
pub mod response;
pub mod routes;

use axum::{Router, http::header::CONTENT_TYPE, middleware::from_fn};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use util::state::AppState;

use crate::middleware::{handle_panic, log_request};

/// Wraps a router with the layers every deployment runs behind: panic
/// boundary, request logging and permissive CORS.
pub fn with_boundary(router: Router) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_TYPE]);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(log_request))
        .layer(cors)
}

/// The complete application: every route under `/api` plus shared layers.
pub fn app(app_state: AppState) -> Router {
    with_boundary(Router::new().nest("/api", routes::routes(app_state)))
}
