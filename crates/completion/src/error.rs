use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when talking to the completion service.
///
/// Callers treat every variant the same way (fall back to the deterministic
/// path); the variants exist so the logs say what went wrong.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion service call failed: {0}")]
    ServiceCall(String),

    #[error("Completion service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Completion response contained no usable entries")]
    EmptyResult,

    #[error("Failed to encode prompt: {0}")]
    Encoding(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        CompletionError::ServiceCall(e.to_string())
    }
}
