//! The ScoringEngine runs every factor over every destination.
//!
//! Factors are chained with the builder pattern the same way for custom
//! engines and for `ScoringEngine::standard()`.

use catalog::{Catalog, Destination, UserPreferences};
use rayon::prelude::*;
use tracing::debug;

use crate::factors::{
    AccommodationFactor, ActivityFactor, BudgetFactor, CulturalFactor, DurationFactor,
    SeasonFactor, TravelTypeBonus,
};
use crate::scored::{FactorScore, MAX_REASONS, RecommendationSource, ScoredDestination};
use crate::traits::MatchFactor;

/// Weighted-sum scorer over a list of factors.
///
/// ## Usage
/// ```ignore
/// let engine = ScoringEngine::standard();
/// let top = engine.score(&preferences, &catalog, 5);
/// ```
pub struct ScoringEngine {
    factors: Vec<Box<dyn MatchFactor>>,
}

impl ScoringEngine {
    /// Create a new engine with no factors.
    pub fn new() -> Self {
        Self {
            factors: Vec::new(),
        }
    }

    /// The six weighted factors followed by the travel-type bonus.
    ///
    /// Factor order is also reason priority order.
    pub fn standard() -> Self {
        Self::new()
            .add_factor(BudgetFactor)
            .add_factor(SeasonFactor)
            .add_factor(DurationFactor)
            .add_factor(ActivityFactor)
            .add_factor(AccommodationFactor)
            .add_factor(CulturalFactor)
            .add_factor(TravelTypeBonus)
    }

    /// Add a factor to the engine (builder pattern).
    pub fn add_factor(mut self, factor: impl MatchFactor + 'static) -> Self {
        self.factors.push(Box::new(factor));
        self
    }

    pub fn factor_names(&self) -> Vec<&str> {
        self.factors.iter().map(|f| f.name()).collect()
    }

    /// Score the whole catalog and return the best `limit` destinations.
    ///
    /// ## Algorithm
    /// 1. Score each destination in parallel (output keeps catalog order)
    /// 2. Stable sort by score, highest first, so ties keep catalog order
    /// 3. Truncate to `limit`
    pub fn score(
        &self,
        preferences: &UserPreferences,
        catalog: &Catalog,
        limit: usize,
    ) -> Vec<ScoredDestination> {
        let mut scored: Vec<ScoredDestination> = catalog
            .destinations()
            .par_iter()
            .map(|destination| self.score_one(destination, preferences))
            .collect();

        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(limit);

        debug!(
            "Scored {} destinations, returning top {}",
            catalog.len(),
            scored.len()
        );
        scored
    }

    /// Score a single destination.
    pub fn score_one(
        &self,
        destination: &Destination,
        preferences: &UserPreferences,
    ) -> ScoredDestination {
        let mut total = 0.0;
        let mut reasons = Vec::new();

        for factor in &self.factors {
            let outcome = factor.evaluate(destination, preferences);
            total += outcome.score * factor.weight();
            if let Some(reason) = outcome.reason {
                reasons.push(reason);
            }
        }
        reasons.truncate(MAX_REASONS);

        ScoredDestination {
            destination: destination.clone(),
            match_score: to_match_score(total),
            match_reasons: reasons,
            ai_insight: None,
            source: RecommendationSource::Algorithmic,
        }
    }

    /// Per-factor sub-scores for one destination, in factor order.
    pub fn breakdown(
        &self,
        destination: &Destination,
        preferences: &UserPreferences,
    ) -> Vec<FactorScore> {
        self.factors
            .iter()
            .map(|factor| {
                let outcome = factor.evaluate(destination, preferences);
                FactorScore {
                    name: factor.name().to_string(),
                    weight: factor.weight(),
                    score: outcome.score,
                    contribution: outcome.score * factor.weight(),
                }
            })
            .collect()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Round a weighted total to an integer percentage. Not clamped at 100.
fn to_match_score(total: f64) -> u32 {
    (total * 100.0).round().max(0.0) as u32
}
