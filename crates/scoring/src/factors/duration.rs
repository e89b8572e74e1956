//! Trip length fit.

use catalog::{Destination, UserPreferences};

use crate::factors::DURATION_WEIGHT;
use crate::traits::{FactorOutcome, MatchFactor};

pub struct DurationFactor;

impl MatchFactor for DurationFactor {
    fn name(&self) -> &str {
        "duration"
    }

    fn weight(&self) -> f64 {
        DURATION_WEIGHT
    }

    fn evaluate(&self, destination: &Destination, preferences: &UserPreferences) -> FactorOutcome {
        if destination.ideal_duration.contains(&preferences.duration) {
            FactorOutcome::new(1.0).with_reason(format!(
                "Great for a {} trip",
                preferences.duration.to_lowercase()
            ))
        } else {
            FactorOutcome::new(0.4)
        }
    }
}
