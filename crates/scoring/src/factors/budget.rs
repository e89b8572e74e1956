//! Budget fit.
//!
//! Exact category match scores 1.0. A Medium destination is a half match for
//! anyone not asking for High; every other mismatch scores 0.3.

use catalog::{BudgetCategory, Destination, UserPreferences};

use crate::factors::BUDGET_WEIGHT;
use crate::traits::{FactorOutcome, MatchFactor};

pub struct BudgetFactor;

impl BudgetFactor {
    pub fn sub_score(destination: BudgetCategory, preferred: BudgetCategory) -> f64 {
        if destination == preferred {
            1.0
        } else if destination == BudgetCategory::Medium && preferred != BudgetCategory::High {
            0.5
        } else {
            0.3
        }
    }
}

impl MatchFactor for BudgetFactor {
    fn name(&self) -> &str {
        "budget"
    }

    fn weight(&self) -> f64 {
        BUDGET_WEIGHT
    }

    fn evaluate(&self, destination: &Destination, preferences: &UserPreferences) -> FactorOutcome {
        let score = Self::sub_score(destination.budget_category, preferences.budget);
        let outcome = FactorOutcome::new(score);
        if score == 1.0 {
            outcome.with_reason(format!(
                "Perfect for your {} budget",
                preferences.budget.as_str().to_lowercase()
            ))
        } else {
            outcome
        }
    }
}
