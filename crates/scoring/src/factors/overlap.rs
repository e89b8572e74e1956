//! Tag-overlap factors: activities, accommodation and cultural interests.
//!
//! All three score the fraction of the traveler's wishes that the destination
//! offers. An empty wish list is a full match.

use catalog::{Destination, UserPreferences};

use crate::factors::{ACCOMMODATION_WEIGHT, ACTIVITY_WEIGHT, CULTURAL_WEIGHT};
use crate::traits::{FactorOutcome, MatchFactor};

/// Fraction of `wanted` present in `offered`, 1.0 when nothing is wanted.
pub fn overlap_fraction(wanted: &[String], offered: &[String]) -> f64 {
    if wanted.is_empty() {
        return 1.0;
    }
    let matches = wanted.iter().filter(|w| offered.contains(w)).count();
    matches as f64 / wanted.len() as f64
}

/// Wanted tags the destination offers, in the traveler's order
fn matched<'a>(wanted: &'a [String], offered: &[String]) -> Vec<&'a str> {
    wanted
        .iter()
        .filter(|w| offered.contains(w))
        .map(String::as_str)
        .collect()
}

pub struct ActivityFactor;

impl MatchFactor for ActivityFactor {
    fn name(&self) -> &str {
        "activities"
    }

    fn weight(&self) -> f64 {
        ACTIVITY_WEIGHT
    }

    fn evaluate(&self, destination: &Destination, preferences: &UserPreferences) -> FactorOutcome {
        let outcome =
            FactorOutcome::new(overlap_fraction(&preferences.activities, &destination.activities));

        let found = matched(&preferences.activities, &destination.activities);
        if found.is_empty() {
            return outcome;
        }
        let named = found.iter().take(2).copied().collect::<Vec<_>>().join(" & ");
        outcome.with_reason(format!("Offers {}", named.to_lowercase()))
    }
}

pub struct AccommodationFactor;

impl MatchFactor for AccommodationFactor {
    fn name(&self) -> &str {
        "accommodation"
    }

    fn weight(&self) -> f64 {
        ACCOMMODATION_WEIGHT
    }

    fn evaluate(&self, destination: &Destination, preferences: &UserPreferences) -> FactorOutcome {
        FactorOutcome::new(overlap_fraction(
            &preferences.accommodation,
            &destination.accommodation_types,
        ))
    }
}

pub struct CulturalFactor;

impl MatchFactor for CulturalFactor {
    fn name(&self) -> &str {
        "cultural"
    }

    fn weight(&self) -> f64 {
        CULTURAL_WEIGHT
    }

    fn evaluate(&self, destination: &Destination, preferences: &UserPreferences) -> FactorOutcome {
        let outcome =
            FactorOutcome::new(overlap_fraction(&preferences.cultural, &destination.cultural_tags));

        match matched(&preferences.cultural, &destination.cultural_tags).first() {
            Some(first) => outcome.with_reason(format!("Rich in {}", first.to_lowercase())),
            None => outcome,
        }
    }
}
