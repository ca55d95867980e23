use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use db::{
    HistoryStore, SymptomCheckRepository,
    test_utils::{closed_test_db, setup_test_db},
};
use scorer::PolicyKind;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use util::state::AppState;

/// Full application over a fresh in-memory database.
///
/// Returns the database handle too so tests can inspect what was stored.
pub async fn make_test_app(
    policy: PolicyKind,
    history_limit: Option<u64>,
) -> (Router, DatabaseConnection) {
    let db = setup_test_db().await;
    let app = api::app(AppState::new(db.clone(), policy, history_limit));
    (app, db)
}

/// Full application whose database pool has been closed.
pub async fn make_unreachable_app(policy: PolicyKind) -> Router {
    api::app(AppState::new(closed_test_db().await, policy, Some(10)))
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    read_json(app.clone().oneshot(req).await.unwrap()).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    read_json(app.clone().oneshot(req).await.unwrap()).await
}

pub async fn stored_count(db: &DatabaseConnection) -> u64 {
    SymptomCheckRepository::new(db.clone())
        .count()
        .await
        .unwrap()
}
