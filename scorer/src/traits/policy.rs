use crate::types::{Classification, PolicyKind, SymptomInput};

/// ScoringPolicy is a strategy trait for turning symptoms into a risk classification.
///
/// Implementations are pure: no I/O, no shared mutable state, and the same input
/// always yields the same classification.
pub trait ScoringPolicy: Send + Sync {
    /// Which formula this policy implements.
    fn kind(&self) -> PolicyKind;

    /// Score one symptom input.
    fn score(&self, input: &SymptomInput) -> Classification;
}
