//! # Types Module
//!
//! Core data structures shared by every scoring policy: the submitted symptom
//! input, the risk level scale, the policy selector and the classification
//! produced by a policy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Symptoms as submitted by a client.
///
/// Deserializes untagged, so both `["fever", "chills"]` and
/// `"I have a fever and chills"` are accepted. A list containing anything
/// other than strings fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymptomInput {
    List(Vec<String>),
    Text(String),
}

impl SymptomInput {
    /// The form persisted in history: list entries joined with `,`, text unchanged.
    pub fn normalized(&self) -> String {
        match self {
            SymptomInput::List(items) => items.join(","),
            SymptomInput::Text(text) => text.clone(),
        }
    }

    /// Individual symptom tokens.
    ///
    /// List entries are returned as submitted, untrimmed, so `" fever"` or
    /// `"fever, chills"` is a single unrecognised token. Free text is split on
    /// commas, trimmed, and empty pieces are dropped. Rescoring a stored
    /// [`normalized`](Self::normalized) form only reproduces the original
    /// tokens when no list entry contained a comma or surrounding whitespace.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            SymptomInput::List(items) => items.iter().map(String::as_str).collect(),
            SymptomInput::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Lowercased text scanned for keyword phrases.
    pub fn haystack(&self) -> String {
        self.normalized().to_lowercase()
    }
}

impl From<Vec<String>> for SymptomInput {
    fn from(items: Vec<String>) -> Self {
        SymptomInput::List(items)
    }
}

impl From<&str> for SymptomInput {
    fn from(text: &str) -> Self {
        SymptomInput::Text(text.to_owned())
    }
}

/// Coarse risk bucket, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Which scoring formula produced a classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PolicyKind {
    /// Counts recognised symptom tokens against fixed thresholds.
    #[default]
    #[strum(to_string = "count_threshold", serialize = "a")]
    CountThreshold,
    /// Sums tiered keyword weights found in free text into a percentage.
    #[strum(to_string = "weighted_keyword", serialize = "b")]
    WeightedKeyword,
}

/// Result of running a policy over one symptom input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub policy: PolicyKind,
    pub level: RiskLevel,
    /// Short label, e.g. `"High risk"` or `"Medium Risk"`.
    pub label: String,
    /// Fixed advisory sentence attached to the label.
    pub diagnosis: String,
    /// Estimated risk percentage in `[0, 95]`; only set by the weighted policy.
    pub risk_score: Option<f64>,
    /// Keywords that matched, in the order they were found.
    pub found_symptoms: Vec<String>,
    pub recommendations: Vec<String>,
}
