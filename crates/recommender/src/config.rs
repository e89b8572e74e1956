//! Engine configuration.
//!
//! `EngineConfig` is read from the environment (and `.env`) once at startup.
//! The orchestrator never reads the environment itself: it receives an
//! [`OrchestratorConfig`] whose `ai_enabled` flag records whether a credential
//! was present.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use completion::{CompletionService, GeminiService};
use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Gemini API key; AI paths are skipped when unset or blank
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    #[serde(default = "default_model")]
    pub gemini_model: String,

    #[serde(default = "default_api_url")]
    pub gemini_api_url: String,

    /// Bound on each completion call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub completion_timeout_secs: u64,

    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    #[serde(default = "default_wishlist_path")]
    pub wishlist_path: PathBuf,
}

fn default_model() -> String {
    completion::gemini::DEFAULT_MODEL.to_string()
}

fn default_api_url() -> String {
    completion::gemini::DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    completion::DEFAULT_TIMEOUT.as_secs()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/destinations.json")
}

fn default_wishlist_path() -> PathBuf {
    PathBuf::from("data/wishlist.json")
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<EngineConfig>().context("Failed to load config")
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, EngineConfig>(vars).context("Failed to load config")
    }

    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig {
            ai_enabled: self.api_key().is_some(),
            completion_timeout: Duration::from_secs(self.completion_timeout_secs),
        }
    }

    /// The Gemini backend, if a credential is configured
    pub fn completion_service(&self) -> Option<Arc<dyn CompletionService>> {
        self.api_key().map(|key| {
            Arc::new(GeminiService::new(
                key,
                self.gemini_api_url.clone(),
                self.gemini_model.clone(),
            )) as Arc<dyn CompletionService>
        })
    }
}

/// What the orchestrator needs to know about its environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// A completion credential is configured; when false no AI call is made
    pub ai_enabled: bool,
    pub completion_timeout: Duration,
}

impl OrchestratorConfig {
    pub fn algorithmic_only() -> Self {
        Self {
            ai_enabled: false,
            completion_timeout: completion::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_ai(completion_timeout: Duration) -> Self {
        Self {
            ai_enabled: true,
            completion_timeout,
        }
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self::algorithmic_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_key() {
        let config = EngineConfig::from_vars(vars(&[])).unwrap();
        assert!(config.api_key().is_none());
        assert_eq!(config.gemini_model, "gemini-pro");
        assert_eq!(config.catalog_path, PathBuf::from("data/destinations.json"));

        let orchestrator = config.orchestrator_config();
        assert!(!orchestrator.ai_enabled);
        assert_eq!(orchestrator.completion_timeout, Duration::from_secs(8));
        assert!(config.completion_service().is_none());
    }

    #[test]
    fn test_key_enables_ai() {
        let config = EngineConfig::from_vars(vars(&[
            ("GEMINI_API_KEY", "abc123"),
            ("COMPLETION_TIMEOUT_SECS", "3"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), Some("abc123"));
        let orchestrator = config.orchestrator_config();
        assert!(orchestrator.ai_enabled);
        assert_eq!(orchestrator.completion_timeout, Duration::from_secs(3));
        assert_eq!(config.completion_service().unwrap().name(), "gemini");
    }

    #[test]
    fn test_blank_key_counts_as_absent() {
        let config = EngineConfig::from_vars(vars(&[("GEMINI_API_KEY", "   ")])).unwrap();
        assert!(!config.orchestrator_config().ai_enabled);
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        assert!(EngineConfig::from_vars(vars(&[("COMPLETION_TIMEOUT_SECS", "soon")])).is_err());
    }
}
