//! Travel-type bonus.
//!
//! Not part of the weighted sum: a matching travel type adds a flat 0.05 on
//! top, which is how a total can reach 1.05 and a final score 105.

use catalog::{Destination, UserPreferences};

use crate::factors::TRAVEL_TYPE_BONUS;
use crate::traits::{FactorOutcome, MatchFactor};

pub struct TravelTypeBonus;

impl MatchFactor for TravelTypeBonus {
    fn name(&self) -> &str {
        "travel_type"
    }

    fn weight(&self) -> f64 {
        TRAVEL_TYPE_BONUS
    }

    fn evaluate(&self, destination: &Destination, preferences: &UserPreferences) -> FactorOutcome {
        if destination.travel_types.contains(&preferences.travel_type) {
            FactorOutcome::new(1.0).with_reason(format!(
                "Perfect for {} travel",
                preferences.travel_type.to_lowercase()
            ))
        } else {
            FactorOutcome::new(0.0)
        }
    }
}
