//! Scored results handed back to callers.

use catalog::Destination;
use serde::Serialize;

/// Most reasons attached to a single result
pub const MAX_REASONS: usize = 3;

/// Which path produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationSource {
    /// Ranked by the completion service
    Ai,
    /// Ranked by the weighted factor engine
    Algorithmic,
}

/// A destination together with how well it matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub destination: Destination,
    /// 0-100, or up to 105 with the travel-type bonus
    pub match_score: u32,
    /// Most salient first, at most [`MAX_REASONS`]
    pub match_reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
    pub source: RecommendationSource,
}

/// One factor's share of a destination's total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorScore {
    pub name: String,
    pub weight: f64,
    pub score: f64,
    pub contribution: f64,
}
