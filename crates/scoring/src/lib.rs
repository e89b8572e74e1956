//! Deterministic scoring of destinations against traveler preferences.
//!
//! This crate provides:
//! - MatchFactor trait and the standard factor implementations
//! - ScoringEngine for composing factors and ranking a catalog
//! - ScoredDestination, the result shape shared with the orchestrator
//!
//! ## Architecture
//! Every destination is judged by each factor independently:
//! 1. Each factor returns a sub-score in [0, 1] and maybe a reason
//! 2. The engine sums `sub_score * weight` and rounds to an integer percentage
//! 3. Results are stably sorted by score and truncated to the requested limit
//!
//! ## Example Usage
//! ```ignore
//! use scoring::ScoringEngine;
//!
//! let engine = ScoringEngine::standard();
//! for result in engine.score(&preferences, &catalog, 5) {
//!     println!("{} {}", result.destination.name, result.match_score);
//! }
//! ```

pub mod traits;
pub mod factors;
pub mod engine;
pub mod scored;

// Re-export main types
pub use engine::ScoringEngine;
pub use scored::{FactorScore, MAX_REASONS, RecommendationSource, ScoredDestination};
pub use traits::{FactorOutcome, MatchFactor};
