//! Static keyword tables used by the scoring policies.
//!
//! Tables are process-wide and read-only. Every phrase is stored lowercased.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Symptoms recognised by the count-threshold policy.
pub const RECOGNISED_SYMPTOMS: [&str; 6] =
    ["fever", "chills", "headache", "sweating", "fatigue", "nausea"];

pub static RECOGNISED_SYMPTOM_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| RECOGNISED_SYMPTOMS.iter().copied().collect());

/// A group of phrases that all contribute the same weight when present.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTier {
    pub name: &'static str,
    pub weight: u32,
    pub phrases: &'static [&'static str],
}

pub const HIGH_TIER: KeywordTier = KeywordTier {
    name: "high",
    weight: 3,
    phrases: &[
        "fever",
        "chills",
        "sweating",
        "headache",
        "nausea",
        "vomiting",
        "body aches",
        "fatigue",
    ],
};

pub const MEDIUM_TIER: KeywordTier = KeywordTier {
    name: "medium",
    weight: 2,
    phrases: &["diarrhea", "abdominal pain", "muscle pain", "jaundice"],
};

pub const LOW_TIER: KeywordTier = KeywordTier {
    name: "low",
    weight: 1,
    phrases: &["cough", "mild headache", "tiredness"],
};

/// Tiers in scan order, heaviest first.
pub static WEIGHTED_TIERS: [KeywordTier; 3] = [HIGH_TIER, MEDIUM_TIER, LOW_TIER];

pub fn is_recognised(token: &str) -> bool {
    RECOGNISED_SYMPTOM_SET.contains(token.to_lowercase().as_str())
}
