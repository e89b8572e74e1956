//! Season fit. "Anytime" matches every destination but never earns a reason.

use catalog::{Destination, UserPreferences};

use crate::factors::SEASON_WEIGHT;
use crate::traits::{FactorOutcome, MatchFactor};

pub struct SeasonFactor;

impl MatchFactor for SeasonFactor {
    fn name(&self) -> &str {
        "season"
    }

    fn weight(&self) -> f64 {
        SEASON_WEIGHT
    }

    fn evaluate(&self, destination: &Destination, preferences: &UserPreferences) -> FactorOutcome {
        if preferences.is_anytime() {
            return FactorOutcome::new(1.0);
        }
        if destination.best_season.contains(&preferences.season) {
            FactorOutcome::new(1.0).with_reason(format!("Ideal during {}", preferences.season))
        } else {
            FactorOutcome::new(0.3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::fixtures;

    #[test]
    fn test_season_in_best_seasons() {
        let outcome = SeasonFactor.evaluate(&fixtures::destination(), &fixtures::preferences());
        assert_eq!(outcome.score, 1.0);
        assert_eq!(outcome.reason.as_deref(), Some("Ideal during Winter"));
    }

    #[test]
    fn test_secondary_season_also_matches() {
        let mut preferences = fixtures::preferences();
        preferences.season = "Spring".to_string();
        let outcome = SeasonFactor.evaluate(&fixtures::destination(), &preferences);
        assert_eq!(outcome.score, 1.0);
    }

    #[test]
    fn test_anytime_matches_without_reason() {
        let mut preferences = fixtures::preferences();
        preferences.season = catalog::ANYTIME.to_string();
        let outcome = SeasonFactor.evaluate(&fixtures::destination(), &preferences);
        assert_eq!(outcome.score, 1.0);
        assert!(outcome.reason.is_none());
    }

    #[test]
    fn test_off_season() {
        let mut preferences = fixtures::preferences();
        preferences.season = "Monsoon".to_string();
        let outcome = SeasonFactor.evaluate(&fixtures::destination(), &preferences);
        assert_eq!(outcome.score, 0.3);
        assert!(outcome.reason.is_none());
    }
}
