//! A policy that scores free text by the weight of the keyword phrases it contains.
//!
//! The input is lowercased and scanned for every phrase in every tier. A phrase
//! contributes its tier weight once if it occurs anywhere in the text, however
//! often it occurs. The summed weight is normalized against [`WEIGHT_DIVISOR`]
//! and capped at [`SCORE_CAP`].

use crate::keywords::WEIGHTED_TIERS;
use crate::traits::policy::ScoringPolicy;
use crate::types::{Classification, PolicyKind, RiskLevel, SymptomInput};

/// Total weight that maps to 100 percent before capping.
pub const WEIGHT_DIVISOR: f64 = 15.0;
/// Highest percentage the policy will ever report.
pub const SCORE_CAP: f64 = 95.0;

pub const LOW_RISK_CEILING: f64 = 30.0;
pub const MEDIUM_RISK_CEILING: f64 = 70.0;

pub struct WeightedKeywordPolicy;

/// Converts a summed keyword weight into a capped percentage.
pub fn risk_percentage(total_weight: u32) -> f64 {
    ((total_weight as f64 / WEIGHT_DIVISOR) * 100.0).min(SCORE_CAP)
}

fn level_for(percentage: f64) -> RiskLevel {
    if percentage < LOW_RISK_CEILING {
        RiskLevel::Low
    } else if percentage < MEDIUM_RISK_CEILING {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

fn recommendations_for(level: RiskLevel, found: &[String]) -> Vec<String> {
    let mut items: Vec<String> = match level {
        RiskLevel::Low => vec![
            "Monitor your symptoms for any changes",
            "Use mosquito prevention measures",
            "Consult a healthcare provider if symptoms persist or worsen",
        ],
        RiskLevel::Moderate => vec![
            "Consult a healthcare provider within 24 hours",
            "Get a malaria test if available",
            "Rest and stay hydrated",
            "Use mosquito nets and repellents to prevent further exposure",
        ],
        RiskLevel::High => vec![
            "Seek medical attention immediately",
            "Request a malaria test",
            "Follow healthcare provider's instructions for treatment",
        ],
    }
    .into_iter()
    .map(String::from)
    .collect();

    if level == RiskLevel::High {
        items.push(format!(
            "Inform them about your symptoms: {}",
            found.join(", ")
        ));
    }
    items
}

impl ScoringPolicy for WeightedKeywordPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::WeightedKeyword
    }

    fn score(&self, input: &SymptomInput) -> Classification {
        let haystack = input.haystack();

        let mut total_weight = 0;
        let mut found = Vec::new();
        for tier in WEIGHTED_TIERS.iter() {
            for phrase in tier.phrases {
                if haystack.contains(phrase) {
                    total_weight += tier.weight;
                    found.push((*phrase).to_string());
                }
            }
        }

        let percentage = risk_percentage(total_weight);
        let level = level_for(percentage);
        let (label, severity) = match level {
            RiskLevel::Low => ("Low Risk", "low"),
            RiskLevel::Moderate => ("Medium Risk", "moderate"),
            RiskLevel::High => ("High Risk", "high"),
        };

        tracing::debug!(total_weight, percentage, "weighted keyword score");

        Classification {
            policy: self.kind(),
            level,
            label: label.to_string(),
            diagnosis: format!("Your symptoms suggest a {severity} risk of malaria."),
            risk_score: Some(percentage),
            recommendations: recommendations_for(level, &found),
            found_symptoms: found,
        }
    }
}
