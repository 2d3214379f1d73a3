//! Base scorer trait
//!
//! A scorer is a pure function from Document Text to a typed result with
//! named sub-checks and a normalized score. Scorers never fail and never
//! hold mutable state, so the same scorer can serve any number of analyses.

use crate::models::CheckResult;

/// Trait for all document scorers
///
/// # Example Implementation
///
/// ```ignore
/// pub struct LengthScorer;
///
/// impl Scorer for LengthScorer {
///     type Output = LengthCheck;
///
///     fn name(&self) -> &'static str {
///         "length"
///     }
///
///     fn description(&self) -> &'static str {
///         "Checks the document is long enough"
///     }
///
///     fn score(&self, text: &str) -> LengthCheck {
///         LengthCheck::from_len(text.len())
///     }
/// }
/// ```
pub trait Scorer: Send + Sync {
    /// Result type, serialized under this scorer's report key
    type Output: CheckResult;

    /// Unique identifier, used in logs
    fn name(&self) -> &'static str;

    /// Human-readable description of what this scorer checks
    fn description(&self) -> &'static str;

    /// Score the text. Must be total over any string, including "".
    fn score(&self, text: &str) -> Self::Output;
}
