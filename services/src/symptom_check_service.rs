//! Symptom analysis as a single unit of work.
//!
//! `analyze` scores the input and persists the result before anything is handed
//! back. If the write fails the classification is dropped, so a caller either
//! gets a stored result or an error, never a score that history does not know about.

use crate::error::{ServiceError, ServiceResult};
use db::models::symptom_check::Model as SymptomCheck;
use db::{HistoryStore, NewSymptomCheck};
use scorer::{Classification, PolicyKind, SymptomInput};
use tracing::{error, info};

/// A persisted check together with the classification that produced it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub check: SymptomCheck,
    pub classification: Classification,
}

pub struct SymptomCheckService<S: HistoryStore> {
    store: S,
    policy: PolicyKind,
    default_limit: Option<u64>,
}

fn to_new_check(input: &SymptomInput, classification: &Classification) -> NewSymptomCheck {
    NewSymptomCheck {
        symptoms: input.normalized(),
        policy: classification.policy.to_string(),
        risk_level: classification.label.clone(),
        diagnosis: classification.diagnosis.clone(),
        risk_score: classification.risk_score,
        found_symptoms: classification.found_symptoms.clone(),
    }
}

impl<S: HistoryStore> SymptomCheckService<S> {
    pub fn new(store: S, policy: PolicyKind, default_limit: Option<u64>) -> Self {
        Self {
            store,
            policy,
            default_limit,
        }
    }

    /// Scores `input` with the configured policy and stores the result.
    pub async fn analyze(&self, input: SymptomInput) -> ServiceResult<Analysis> {
        let classification = scorer::score(self.policy, &input);

        let check = self
            .store
            .append(to_new_check(&input, &classification))
            .await
            .map_err(|e| {
                error!(error = %e, policy = %self.policy, "failed to persist symptom check");
                ServiceError::from(e)
            })?;

        info!(
            id = check.id,
            policy = %self.policy,
            risk_level = %classification.label,
            matches = classification.found_symptoms.len(),
            "symptom check analyzed"
        );

        Ok(Analysis {
            check,
            classification,
        })
    }

    /// Recent checks, newest first.
    ///
    /// An explicit `limit` overrides the configured default cap.
    pub async fn history(&self, limit: Option<u64>) -> ServiceResult<Vec<SymptomCheck>> {
        let limit = limit.or(self.default_limit);
        self.store.list_recent(limit).await.map_err(|e| {
            error!(error = %e, "failed to read symptom history");
            ServiceError::from(e)
        })
    }
}
