use db::SymptomCheckRepository;
use db::models::symptom_check::Model as SymptomCheck;
use scorer::{Classification, PolicyKind, SymptomInput};
use serde::{Deserialize, Serialize};
use services::SymptomCheckService;
use util::state::AppState;
use validator::Validate;

/// Body of `POST /api/analyze-symptoms`.
///
/// `symptoms` is optional here so a missing field can be reported as such
/// instead of as a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub symptoms: Option<SymptomInput>,
}

/// Analyze response; the shape depends on the configured policy.
///
/// Count-threshold:
/// ```json
/// { "diagnosis": "High risk of Malaria. Please consult a doctor immediately." }
/// ```
///
/// Weighted-keyword:
/// ```json
/// {
///   "success": true,
///   "risk_score": 40.0,
///   "risk_level": "Medium Risk",
///   "found_symptoms": ["fever", "chills"],
///   "recommendations": ["Consult a healthcare provider within 24 hours", "..."]
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Diagnosis {
        diagnosis: String,
    },
    Scored {
        success: bool,
        risk_score: f64,
        risk_level: String,
        found_symptoms: Vec<String>,
        recommendations: Vec<String>,
    },
}

impl From<Classification> for AnalyzeResponse {
    fn from(c: Classification) -> Self {
        match c.policy {
            PolicyKind::CountThreshold => AnalyzeResponse::Diagnosis {
                diagnosis: c.diagnosis,
            },
            PolicyKind::WeightedKeyword => AnalyzeResponse::Scored {
                success: true,
                risk_score: c.risk_score.unwrap_or(0.0),
                risk_level: c.label,
                found_symptoms: c.found_symptoms,
                recommendations: c.recommendations,
            },
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct HistoryQuery {
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: Option<u64>,
}

/// One stored check as returned by `GET /api/symptom-history`.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub symptoms: String,
    pub policy: String,
    pub risk_level: String,
    pub diagnosis: String,
    pub risk_score: Option<f64>,
    pub found_symptoms: Vec<String>,
    /// `YYYY-MM-DD HH:MM:SS`, UTC.
    pub log_date: String,
    /// RFC 3339.
    pub created_at: String,
}

impl From<SymptomCheck> for HistoryEntry {
    fn from(check: SymptomCheck) -> Self {
        Self {
            found_symptoms: check.found_symptom_list(),
            log_date: check.log_date(),
            created_at: check.created_at.to_rfc3339(),
            id: check.id,
            symptoms: check.symptoms,
            policy: check.policy,
            risk_level: check.risk_level,
            diagnosis: check.diagnosis,
            risk_score: check.risk_score,
        }
    }
}

/// Per-request service over the shared connection pool.
pub fn symptom_service(state: &AppState) -> SymptomCheckService<SymptomCheckRepository> {
    SymptomCheckService::new(
        SymptomCheckRepository::new(state.db_clone()),
        state.policy(),
        state.history_limit(),
    )
}
