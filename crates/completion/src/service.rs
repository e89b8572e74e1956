//! The text-in/text-out boundary to a generative model.

use async_trait::async_trait;

use crate::error::CompletionError;

/// A generative text endpoint.
///
/// Implementations only move text: prompt construction and response parsing
/// live in [`CompletionClient`](crate::CompletionClient), so any backend (or a
/// test stub) can be swapped in behind this trait.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send a prompt and return the model's raw text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
