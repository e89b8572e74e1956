//! Gemini `generateContent` REST backend.
//!
//! API Flow:
//! POST {api_url}/v1beta/models/{model}:generateContent
//!   body: {"contents": [{"parts": [{"text": prompt}]}]}
//!   reply: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::CompletionError;
use crate::service::CompletionService;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Clone)]
pub struct GeminiService {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiService {
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_url, self.model)
    }
}

#[async_trait]
impl CompletionService for GeminiService {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = self.endpoint();
        debug!(model = %self.model, prompt_len = prompt.len(), "Sending completion request");

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(%status, "Completion service returned an error");
            return Err(CompletionError::ServiceCall(format!("{status}: {detail}")));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(CompletionError::MalformedResponse(
                "response had no candidate text".to_string(),
            ));
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let service = GeminiService::new("key", "http://localhost:8080/", "gemini-pro");
        assert_eq!(
            service.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_call_failure() {
        // Port 9 (discard) on localhost is not listening in test environments
        let service = GeminiService::new("key", "http://127.0.0.1:9", DEFAULT_MODEL);
        let err = service.complete("hi").await.unwrap_err();
        assert!(matches!(err, CompletionError::ServiceCall(_)));
    }
}
