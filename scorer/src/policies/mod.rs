//! # Policies
//!
//! Interchangeable scoring formulas. Both implement [`ScoringPolicy`] so the
//! rest of the system never depends on which one is configured.
//!
//! - [`count_threshold_policy`]: counts recognised symptom tokens.
//! - [`weighted_keyword_policy`]: sums tiered keyword weights found in free text.

pub mod count_threshold_policy;
pub mod weighted_keyword_policy;

use crate::traits::policy::ScoringPolicy;
use crate::types::PolicyKind;
use count_threshold_policy::CountThresholdPolicy;
use weighted_keyword_policy::WeightedKeywordPolicy;

static COUNT_THRESHOLD: CountThresholdPolicy = CountThresholdPolicy;
static WEIGHTED_KEYWORD: WeightedKeywordPolicy = WeightedKeywordPolicy;

/// Returns the process-wide instance of the requested policy.
pub fn policy_for(kind: PolicyKind) -> &'static dyn ScoringPolicy {
    match kind {
        PolicyKind::CountThreshold => &COUNT_THRESHOLD,
        PolicyKind::WeightedKeyword => &WEIGHTED_KEYWORD,
    }
}
