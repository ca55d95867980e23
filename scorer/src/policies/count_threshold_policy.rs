//! A policy that classifies by how many recognised symptoms were reported.
//!
//! Each submitted token is lowercased and compared exactly against the
//! recognised symptom set. Three or more matches is high risk, at least one is
//! moderate, none is low. There is no numeric score.

use crate::keywords;
use crate::traits::policy::ScoringPolicy;
use crate::types::{Classification, PolicyKind, RiskLevel, SymptomInput};

pub const HIGH_RISK_THRESHOLD: usize = 3;
pub const MODERATE_RISK_THRESHOLD: usize = 1;

pub const HIGH_RISK_DIAGNOSIS: &str = "High risk of Malaria. Please consult a doctor immediately.";
pub const MODERATE_RISK_DIAGNOSIS: &str =
    "Moderate risk of Malaria. Monitor symptoms and consult a doctor if they worsen.";
pub const LOW_RISK_DIAGNOSIS: &str =
    "Low risk of Malaria. Symptoms may be related to another condition.";

pub struct CountThresholdPolicy;

impl CountThresholdPolicy {
    fn level_for(count: usize) -> RiskLevel {
        if count >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if count >= MODERATE_RISK_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

impl ScoringPolicy for CountThresholdPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::CountThreshold
    }

    fn score(&self, input: &SymptomInput) -> Classification {
        let found: Vec<String> = input
            .tokens()
            .into_iter()
            .filter(|token| keywords::is_recognised(token))
            .map(str::to_lowercase)
            .collect();

        let level = Self::level_for(found.len());
        let (label, diagnosis) = match level {
            RiskLevel::High => ("High risk", HIGH_RISK_DIAGNOSIS),
            RiskLevel::Moderate => ("Moderate risk", MODERATE_RISK_DIAGNOSIS),
            RiskLevel::Low => ("Low risk", LOW_RISK_DIAGNOSIS),
        };

        Classification {
            policy: self.kind(),
            level,
            label: label.to_string(),
            diagnosis: diagnosis.to_string(),
            risk_score: None,
            found_symptoms: found,
            recommendations: Vec::new(),
        }
    }
}
