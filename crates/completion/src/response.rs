//! Sanitizing and strict parsing of model output.
//!
//! Models often wrap JSON in a Markdown fence (```json ... ```). The fence is
//! stripped first; whatever remains must parse against the expected schema or
//! the whole response is rejected.

use serde::Deserialize;

use crate::error::CompletionError;

/// Most reasons kept per recommendation
const MAX_REASONS: usize = 3;

/// One ranked entry as returned by the model, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct AiRecommendation {
    pub destination_id: String,
    pub match_score: u32,
    pub match_reasons: Vec<String>,
    pub ai_insight: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommendation {
    destination_id: Option<String>,
    match_score: Option<f64>,
    #[serde(default)]
    match_reasons: Option<Vec<String>>,
    ai_insight: Option<String>,
}

impl RawRecommendation {
    /// `None` when the entry lacks an id or a score
    fn validate(self) -> Option<AiRecommendation> {
        let destination_id = self.destination_id.filter(|id| !id.trim().is_empty())?;
        let score = self.match_score.filter(|s| s.is_finite())?;

        let mut match_reasons = self.match_reasons.unwrap_or_default();
        match_reasons.truncate(MAX_REASONS);

        Some(AiRecommendation {
            destination_id,
            match_score: score.round().max(0.0) as u32,
            match_reasons,
            ai_insight: self.ai_insight.filter(|s| !s.trim().is_empty()),
        })
    }
}

/// Remove a surrounding Markdown code fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json", "JSON", ...) on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };
    body.trim_end().trim_end_matches("```").trim()
}

/// Parse a ranking reply into validated recommendations, at most `limit`.
pub fn parse_recommendations(
    text: &str,
    limit: usize,
) -> Result<Vec<AiRecommendation>, CompletionError> {
    let raw: Vec<RawRecommendation> = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    let recommendations: Vec<AiRecommendation> = raw
        .into_iter()
        .filter_map(RawRecommendation::validate)
        .take(limit)
        .collect();

    if recommendations.is_empty() {
        return Err(CompletionError::EmptyResult);
    }
    Ok(recommendations)
}

/// Parse a match-reasons reply: a JSON array of strings, at most three kept.
pub fn parse_reasons(text: &str) -> Result<Vec<String>, CompletionError> {
    let reasons: Vec<String> = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    let reasons: Vec<String> = reasons
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .take(MAX_REASONS)
        .collect();

    if reasons.is_empty() {
        return Err(CompletionError::EmptyResult);
    }
    Ok(reasons)
}

/// Free-text replies only need trimming, but must not be blank.
pub fn parse_summary(text: &str) -> Result<String, CompletionError> {
    let summary = text.trim();
    if summary.is_empty() {
        return Err(CompletionError::MalformedResponse("empty summary".to_string()));
    }
    Ok(summary.to_string())
}
