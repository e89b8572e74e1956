//! High-level completion client: prompt, call with a deadline, parse.

use std::sync::Arc;
use std::time::Duration;

use catalog::{Destination, UserPreferences};
use tracing::{debug, info};

use crate::error::CompletionError;
use crate::prompt;
use crate::response::{self, AiRecommendation};
use crate::service::CompletionService;

/// Default bound on a single completion call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Client for the generative completion service.
///
/// Wraps a [`CompletionService`] and turns its raw text into typed results.
/// Every call is a single attempt bounded by `timeout`; there are no retries
/// and nothing is cached.
#[derive(Clone)]
pub struct CompletionClient {
    service: Arc<dyn CompletionService>,
    timeout: Duration,
}

impl CompletionClient {
    pub fn new(service: Arc<dyn CompletionService>, timeout: Duration) -> Self {
        info!(
            "Completion client using {} (timeout {:?})",
            service.name(),
            timeout
        );
        Self { service, timeout }
    }

    pub fn service_name(&self) -> &'static str {
        self.service.name()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the model to rank `destinations` for the traveler.
    ///
    /// Returns at most `limit` entries, each with a non-empty id and a score.
    /// The ids are not checked against the catalog here.
    pub async fn rank_destinations(
        &self,
        preferences: &UserPreferences,
        destinations: &[Destination],
        limit: usize,
    ) -> Result<Vec<AiRecommendation>, CompletionError> {
        let prompt = prompt::rank_prompt(preferences, destinations, limit)?;
        let text = self.call(&prompt).await?;
        let recommendations = response::parse_recommendations(&text, limit)?;
        debug!("Model ranked {} destinations", recommendations.len());
        Ok(recommendations)
    }

    /// Ask the model for a free-text trip summary.
    pub async fn summarize(
        &self,
        destination: &Destination,
        preferences: &UserPreferences,
    ) -> Result<String, CompletionError> {
        let prompt = prompt::summary_prompt(destination, preferences);
        let text = self.call(&prompt).await?;
        response::parse_summary(&text)
    }

    /// Ask the model for up to three reasons the destination fits.
    pub async fn match_reasons(
        &self,
        destination: &Destination,
        preferences: &UserPreferences,
    ) -> Result<Vec<String>, CompletionError> {
        let prompt = prompt::reasons_prompt(destination, preferences);
        let text = self.call(&prompt).await?;
        response::parse_reasons(&text)
    }

    async fn call(&self, prompt: &str) -> Result<String, CompletionError> {
        match tokio::time::timeout(self.timeout, self.service.complete(prompt)).await {
            Ok(result) => result.map_err(|e| {
                debug!("{} completion failed: {}", self.service.name(), e);
                e
            }),
            Err(_) => {
                debug!(
                    "{} completion timed out after {:?}",
                    self.service.name(),
                    self.timeout
                );
                Err(CompletionError::Timeout(self.timeout))
            }
        }
    }
}
