//! # Recommendation Orchestrator
//!
//! The single place that decides between AI-sourced and algorithmic results:
//! 1. If no completion credential is configured, go straight to the
//!    deterministic path
//! 2. Otherwise ask the completion service once
//! 3. Keep its answer if it yields at least one usable entry
//! 4. On any failure, timeout or empty answer, fall back to the
//!    deterministic path
//!
//! Ranking, trip summaries and match reasons each run this flow
//! independently. None of them can fail from the caller's point of view.

use std::sync::Arc;
use std::time::Instant;

use catalog::{Catalog, Destination, UserPreferences};
use completion::{AiRecommendation, CompletionClient, CompletionError, CompletionService};
use scoring::{MAX_REASONS, RecommendationSource, ScoredDestination, ScoringEngine};
use tracing::{debug, info, warn};

use crate::config::OrchestratorConfig;
use crate::summary;

/// Coordinates the scoring engine and the completion client.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<Catalog>,
    engine: Arc<ScoringEngine>,
    completion: Option<CompletionClient>,
    config: OrchestratorConfig,
}

impl RecommendationOrchestrator {
    /// Create a new orchestrator.
    ///
    /// # Arguments
    /// * `catalog` - Shared, already validated catalog
    /// * `config` - `ai_enabled` decides whether `service` is ever called
    /// * `service` - Completion backend, wrapped with `config.completion_timeout`
    pub fn new(
        catalog: Arc<Catalog>,
        config: OrchestratorConfig,
        service: Option<Arc<dyn CompletionService>>,
    ) -> Self {
        let completion = service.map(|s| CompletionClient::new(s, config.completion_timeout));
        if config.ai_enabled && completion.is_none() {
            warn!("AI enabled but no completion service supplied; using algorithmic results only");
        }
        Self {
            catalog,
            engine: Arc::new(ScoringEngine::standard()),
            completion,
            config,
        }
    }

    /// An orchestrator that never calls a completion service.
    pub fn algorithmic_only(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, OrchestratorConfig::algorithmic_only(), None)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn config(&self) -> OrchestratorConfig {
        self.config
    }

    /// The completion client, only when AI is enabled
    fn ai_client(&self) -> Option<&CompletionClient> {
        if self.config.ai_enabled {
            self.completion.as_ref()
        } else {
            None
        }
    }

    // =========================================================================
    // Ranking
    // =========================================================================

    /// Main entry point: the best `limit` destinations for these preferences.
    ///
    /// AI results keep the model's own order and scores. Algorithmic results
    /// are sorted by score with catalog order breaking ties.
    pub async fn get_recommendations(
        &self,
        preferences: &UserPreferences,
        limit: usize,
    ) -> Vec<ScoredDestination> {
        let start_time = Instant::now();

        let recommendations = match self.ai_client() {
            None => {
                debug!("No completion credential configured, using algorithmic ranking");
                self.algorithmic_recommendations(preferences, limit)
            }
            Some(client) => match self.ai_recommendations(client, preferences, limit).await {
                Ok(recommendations) => recommendations,
                Err(e) => {
                    warn!("AI recommendation failed, falling back to algorithm: {}", e);
                    self.algorithmic_recommendations(preferences, limit)
                }
            },
        };

        info!(
            "Returning {} recommendations ({:?}) in {:.2?}",
            recommendations.len(),
            recommendations
                .first()
                .map(|r| r.source)
                .unwrap_or(RecommendationSource::Algorithmic),
            start_time.elapsed()
        );
        recommendations
    }

    /// Deterministic ranking from the scoring engine.
    pub fn algorithmic_recommendations(
        &self,
        preferences: &UserPreferences,
        limit: usize,
    ) -> Vec<ScoredDestination> {
        self.engine.score(preferences, &self.catalog, limit)
    }

    async fn ai_recommendations(
        &self,
        client: &CompletionClient,
        preferences: &UserPreferences,
        limit: usize,
    ) -> Result<Vec<ScoredDestination>, CompletionError> {
        let ranked = client
            .rank_destinations(preferences, self.catalog.destinations(), limit)
            .await?;
        let returned = ranked.len();

        let recommendations: Vec<ScoredDestination> = ranked
            .into_iter()
            .filter_map(|rec| self.join_with_catalog(rec))
            .collect();

        if recommendations.is_empty() {
            return Err(CompletionError::EmptyResult);
        }
        debug!(
            "Mapped {} of {} AI recommendations onto the catalog",
            recommendations.len(),
            returned
        );
        Ok(recommendations)
    }

    /// Attach the catalog record to an AI entry; `None` for unknown ids.
    fn join_with_catalog(&self, rec: AiRecommendation) -> Option<ScoredDestination> {
        let Some(destination) = self.catalog.get(&rec.destination_id) else {
            debug!("Dropping AI recommendation for unknown destination {}", rec.destination_id);
            return None;
        };

        let mut match_reasons = rec.match_reasons;
        match_reasons.truncate(MAX_REASONS);

        Some(ScoredDestination {
            destination: destination.clone(),
            match_score: rec.match_score,
            match_reasons,
            ai_insight: rec.ai_insight,
            source: RecommendationSource::Ai,
        })
    }

    // =========================================================================
    // Trip summary
    // =========================================================================

    /// A trip summary for one destination. Never empty.
    pub async fn trip_summary(
        &self,
        destination: &Destination,
        preferences: &UserPreferences,
    ) -> String {
        if let Some(client) = self.ai_client() {
            match client.summarize(destination, preferences).await {
                Ok(text) => return text,
                Err(e) => warn!("AI trip summary failed, falling back to template: {}", e),
            }
        }
        self.template_summary(destination)
    }

    /// The deterministic summary; it depends on the destination only.
    pub fn template_summary(&self, destination: &Destination) -> String {
        summary::template_summary(destination)
    }

    // =========================================================================
    // Match reasons
    // =========================================================================

    /// Up to three reasons the destination suits the traveler.
    pub async fn match_reasons(
        &self,
        destination: &Destination,
        preferences: &UserPreferences,
    ) -> Vec<String> {
        if let Some(client) = self.ai_client() {
            match client.match_reasons(destination, preferences).await {
                Ok(reasons) => return reasons,
                Err(e) => warn!("AI match reasons failed, using canned reasons: {}", e),
            }
        }
        fallback_reasons(preferences)
    }
}

/// Canned reasons built from the preferences alone
pub fn fallback_reasons(preferences: &UserPreferences) -> Vec<String> {
    vec![
        format!(
            "Perfect for your {} budget",
            preferences.budget.as_str().to_lowercase()
        ),
        format!("Ideal during {}", preferences.season),
        format!(
            "Great for {} travel",
            preferences.travel_type.to_lowercase()
        ),
    ]
}
