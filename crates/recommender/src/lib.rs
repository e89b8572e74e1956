//! Recommendation orchestration for the Wayfinder engine.
//!
//! This crate contains the orchestrator that prefers AI-sourced answers and
//! falls back to the deterministic scoring engine and summary template, plus
//! the environment configuration that wires it up.

pub mod config;
pub mod orchestrator;
pub mod summary;

pub use config::{EngineConfig, OrchestratorConfig};
pub use orchestrator::{RecommendationOrchestrator, fallback_reasons};
pub use scoring::{RecommendationSource, ScoredDestination};
