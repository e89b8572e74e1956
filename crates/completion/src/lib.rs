//! Client for the generative completion service.
//!
//! This crate provides the boundary between the recommendation engine and an
//! external text-completion model. It handles:
//! - The `CompletionService` trait (text in, text out) and its Gemini backend
//! - Building prompts for ranking, trip summaries and match reasons
//! - Stripping Markdown fences and strictly parsing the replies
//! - Bounding every call with a timeout
//!
//! Callers only ever see a typed result or a [`CompletionError`].

pub mod client;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod response;
pub mod service;

pub use client::{CompletionClient, DEFAULT_TIMEOUT};
pub use error::CompletionError;
pub use gemini::GeminiService;
pub use response::AiRecommendation;
pub use service::CompletionService;
