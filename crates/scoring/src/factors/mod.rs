//! Factor implementations for the scoring engine.
//!
//! This module contains all the concrete factors that can be composed into a
//! ScoringEngine. `ScoringEngine::standard()` wires them up with the default
//! weights below.

pub mod budget;
pub mod duration;
pub mod overlap;
pub mod season;
pub mod travel_type;

// Re-export for convenience
pub use budget::BudgetFactor;
pub use duration::DurationFactor;
pub use overlap::{AccommodationFactor, ActivityFactor, CulturalFactor, overlap_fraction};
pub use season::SeasonFactor;
pub use travel_type::TravelTypeBonus;

pub const BUDGET_WEIGHT: f64 = 0.25;
pub const SEASON_WEIGHT: f64 = 0.20;
pub const DURATION_WEIGHT: f64 = 0.15;
pub const ACTIVITY_WEIGHT: f64 = 0.20;
pub const ACCOMMODATION_WEIGHT: f64 = 0.10;
pub const CULTURAL_WEIGHT: f64 = 0.10;
/// Flat additive bonus, outside the weighted sum
pub const TRAVEL_TYPE_BONUS: f64 = 0.05;
