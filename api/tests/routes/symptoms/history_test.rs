#[cfg(test)]
mod tests {
    use crate::helpers::{get_json, make_test_app, make_unreachable_app, post_json};
    use axum::http::StatusCode;
    use scorer::PolicyKind;

    const ANALYZE: &str = "/api/analyze-symptoms";
    const HISTORY: &str = "/api/symptom-history";

    #[tokio::test]
    async fn empty_history_is_an_empty_list() {
        let (app, _db) = make_test_app(PolicyKind::CountThreshold, Some(10)).await;

        let (status, json) = get_json(&app, HISTORY).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["message"], "Symptom history retrieved");
    }

    #[tokio::test]
    async fn newest_check_comes_first() {
        let (app, _db) = make_test_app(PolicyKind::CountThreshold, Some(10)).await;

        post_json(&app, ANALYZE, r#"{"symptoms": ["rash"]}"#).await;
        post_json(&app, ANALYZE, r#"{"symptoms": ["fever"]}"#).await;

        let (_, json) = get_json(&app, HISTORY).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["symptoms"], "fever");
        assert_eq!(data[1]["symptoms"], "rash");
        assert!(data[0]["id"].as_i64().unwrap() > data[1]["id"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn entries_carry_both_timestamp_formats() {
        let (app, _db) = make_test_app(PolicyKind::WeightedKeyword, Some(10)).await;
        post_json(&app, ANALYZE, r#"{"symptoms": "jaundice and cough"}"#).await;

        let (_, json) = get_json(&app, HISTORY).await;
        let entry = &json["data"][0];

        let log_date = entry["log_date"].as_str().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(log_date, "%Y-%m-%d %H:%M:%S").is_ok());
        let created_at = entry["created_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());

        assert_eq!(entry["policy"], "weighted_keyword");
        assert_eq!(entry["found_symptoms"], serde_json::json!(["jaundice", "cough"]));
        assert!((entry["risk_score"].as_f64().unwrap() - 20.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn default_cap_limits_history_to_ten() {
        let (app, _db) = make_test_app(PolicyKind::CountThreshold, Some(10)).await;
        for _ in 0..12 {
            post_json(&app, ANALYZE, r#"{"symptoms": ["fever"]}"#).await;
        }

        let (_, json) = get_json(&app, HISTORY).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 10);

        let (_, json) = get_json(&app, "/api/symptom-history?limit=3").await;
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unbounded_config_returns_everything() {
        let (app, _db) = make_test_app(PolicyKind::CountThreshold, None).await;
        for _ in 0..12 {
            post_json(&app, ANALYZE, r#"{"symptoms": ["chills"]}"#).await;
        }

        let (_, json) = get_json(&app, HISTORY).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn invalid_limit_is_rejected() {
        let (app, _db) = make_test_app(PolicyKind::CountThreshold, Some(10)).await;

        let (status, json) = get_json(&app, "/api/symptom-history?limit=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "limit must be between 1 and 1000");

        let (status, _) = get_json(&app, "/api/symptom-history?limit=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreachable_storage_returns_500() {
        let app = make_unreachable_app(PolicyKind::CountThreshold).await;

        let (status, json) = get_json(&app, HISTORY).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Database connection failed");

        let (status, json) = get_json(&app, "/api/symptom-history?limit=5").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Database connection failed");
    }
}
