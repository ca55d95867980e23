#[cfg(test)]
mod tests {
    use crate::helpers::{get_json, make_test_app, make_unreachable_app, post_json, stored_count};
    use axum::http::StatusCode;
    use scorer::PolicyKind;
    use serial_test::serial;
    use util::{config::AppConfig, state::AppState};

    const ANALYZE: &str = "/api/analyze-symptoms";

    #[tokio::test]
    async fn count_policy_high_risk_list_is_stored() {
        let (app, db) = make_test_app(PolicyKind::CountThreshold, Some(10)).await;

        let (status, json) =
            post_json(&app, ANALYZE, r#"{"symptoms": ["fever", "chills", "headache"]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "diagnosis": "High risk of Malaria. Please consult a doctor immediately."
            })
        );

        assert_eq!(stored_count(&db).await, 1);
        let (_, history) = get_json(&app, "/api/symptom-history").await;
        assert_eq!(history["data"][0]["symptoms"], "fever,chills,headache");
        assert_eq!(history["data"][0]["risk_level"], "High risk");
    }

    #[tokio::test]
    async fn count_policy_moderate_and_low() {
        let (app, _db) = make_test_app(PolicyKind::CountThreshold, Some(10)).await;

        let (_, moderate) = post_json(&app, ANALYZE, r#"{"symptoms": ["Nausea", "rash"]}"#).await;
        assert_eq!(
            moderate["diagnosis"],
            "Moderate risk of Malaria. Monitor symptoms and consult a doctor if they worsen."
        );

        let (_, low) = post_json(&app, ANALYZE, r#"{"symptoms": ["rash"]}"#).await;
        assert_eq!(
            low["diagnosis"],
            "Low risk of Malaria. Symptoms may be related to another condition."
        );
    }

    #[tokio::test]
    async fn weighted_policy_scores_free_text() {
        let (app, db) = make_test_app(PolicyKind::WeightedKeyword, Some(10)).await;

        let (status, json) =
            post_json(&app, ANALYZE, r#"{"symptoms": "I have a fever and chills"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["risk_level"], "Medium Risk");
        assert!((json["risk_score"].as_f64().unwrap() - 40.0).abs() < 1e-9);
        assert_eq!(json["found_symptoms"], serde_json::json!(["fever", "chills"]));
        assert!(json["recommendations"].as_array().unwrap().len() >= 3);
        assert_eq!(stored_count(&db).await, 1);
    }

    #[tokio::test]
    async fn empty_submission_is_a_valid_low_risk_record() {
        let (app, db) = make_test_app(PolicyKind::WeightedKeyword, Some(10)).await;

        let (status, json) = post_json(&app, ANALYZE, r#"{"symptoms": []}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["risk_score"], 0.0);
        assert_eq!(json["risk_level"], "Low Risk");
        assert_eq!(stored_count(&db).await, 1);
    }

    #[tokio::test]
    async fn missing_symptoms_is_rejected_without_writing() {
        let (app, db) = make_test_app(PolicyKind::CountThreshold, Some(10)).await;

        let (status, json) = post_json(&app, ANALYZE, r#"{"other": 1}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Missing symptoms data");

        let (status, _) = post_json(&app, ANALYZE, r#"{"symptoms": null}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(stored_count(&db).await, 0);
    }

    #[tokio::test]
    async fn malformed_symptoms_are_rejected_without_writing() {
        let (app, db) = make_test_app(PolicyKind::CountThreshold, Some(10)).await;

        for body in [
            r#"{"symptoms": ["fever", 3]}"#,
            r#"{"symptoms": 42}"#,
            r#"{"symptoms": {"fever": true}}"#,
            "not json",
        ] {
            let (status, json) = post_json(&app, ANALYZE, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["success"], false);
            assert!(json["error"].as_str().unwrap().starts_with("Invalid symptoms data"));
        }

        assert_eq!(stored_count(&db).await, 0);
    }

    #[tokio::test]
    async fn unreachable_storage_returns_500_without_a_result() {
        for policy in [PolicyKind::CountThreshold, PolicyKind::WeightedKeyword] {
            let app = make_unreachable_app(policy).await;

            let (status, json) =
                post_json(&app, ANALYZE, r#"{"symptoms": ["fever", "chills", "headache"]}"#).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(json["success"], false);
            assert_eq!(json["error"], "Database connection failed");
            assert!(json.get("diagnosis").is_none());
            assert!(json.get("risk_score").is_none());
        }
    }

    #[tokio::test]
    async fn write_failure_returns_500_without_a_result() {
        let (app, db) = make_test_app(PolicyKind::WeightedKeyword, Some(10)).await;
        sea_orm::ConnectionTrait::execute_unprepared(&db, "DROP TABLE symptom_checks")
            .await
            .unwrap();

        let (status, json) = post_json(&app, ANALYZE, r#"{"symptoms": "fever"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to save symptom log");
        assert!(json.get("risk_score").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn configured_policy_is_used_by_default_state() {
        AppConfig::set_scoring_policy(PolicyKind::WeightedKeyword);
        AppConfig::set_history_limit(Some(10));

        let db = db::test_utils::setup_test_db().await;
        let app = api::app(AppState::from_config(db));
        let (status, json) = post_json(&app, ANALYZE, r#"{"symptoms": "vomiting"}"#).await;

        AppConfig::reset();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert!((json["risk_score"].as_f64().unwrap() - 20.0).abs() < 1e-9);
    }
}
