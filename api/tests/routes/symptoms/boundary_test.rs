#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, http::{Request, StatusCode}, routing::get};
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("row decoder blew up at symptom_checks.rs:42");
    }

    #[tokio::test]
    async fn panics_become_generic_json_500() {
        let app = api::with_boundary(Router::new().route("/boom", get(explode)));

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("symptom_checks.rs"));

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Internal server error");
    }
}
