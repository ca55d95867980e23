//! Storage contract for symptom check history.

use crate::error::StoreResult;
use crate::models::symptom_check::Model;

/// A fully scored check, ready to be persisted.
///
/// `id` and `created_at` are not part of this type; the store assigns both.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSymptomCheck {
    pub symptoms: String,
    pub policy: String,
    pub risk_level: String,
    pub diagnosis: String,
    pub risk_score: Option<f64>,
    pub found_symptoms: Vec<String>,
}

/// Append-only log of symptom checks.
#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persists one check as a single atomic insert and returns the stored row.
    async fn append(&self, check: NewSymptomCheck) -> StoreResult<Model>;

    /// Most recent checks first, ties broken by id. `None` returns everything.
    async fn list_recent(&self, limit: Option<u64>) -> StoreResult<Vec<Model>>;

    async fn count(&self) -> StoreResult<u64>;
}
