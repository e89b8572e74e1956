//! Core trait for the scoring engine.
//!
//! A `MatchFactor` judges one aspect of a destination against a preference
//! set. The engine multiplies each factor's sub-score by its weight and sums
//! the results.

use catalog::{Destination, UserPreferences};

/// What a factor concluded about one destination.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorOutcome {
    /// Sub-score in `[0, 1]`
    pub score: f64,
    /// Human-readable reason, only when the match is worth telling the user about
    pub reason: Option<String>,
}

impl FactorOutcome {
    pub fn new(score: f64) -> Self {
        Self { score, reason: None }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// One weighted component of the match score.
///
/// ## Design Note
/// - `Send + Sync` lets the engine evaluate destinations on the rayon pool
/// - Factors must be pure: the same inputs always produce the same outcome
pub trait MatchFactor: Send + Sync {
    /// Returns the name of this factor (for logging/explanations)
    fn name(&self) -> &str;

    /// Multiplier applied to the sub-score
    fn weight(&self) -> f64;

    /// Score one destination against the preferences.
    fn evaluate(&self, destination: &Destination, preferences: &UserPreferences) -> FactorOutcome;
}
