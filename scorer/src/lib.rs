//! # Scorer Library
//!
//! Pure symptom risk scoring. A [`SymptomInput`] goes in, a [`Classification`]
//! comes out. No I/O and no shared mutable state.
//!
//! ## Key Concepts
//! - **ScoringPolicy**: strategy trait implemented by every formula.
//! - **Policies**: count-threshold and weighted-keyword scoring.
//! - **Keywords**: process-wide read-only keyword tables.

pub mod keywords;
pub mod policies;
pub mod traits;
pub mod types;

pub use policies::policy_for;
pub use traits::policy::ScoringPolicy;
pub use types::{Classification, PolicyKind, RiskLevel, SymptomInput};

/// Scores `input` with the policy selected by `kind`.
pub fn score(kind: PolicyKind, input: &SymptomInput) -> Classification {
    policy_for(kind).score(input)
}
