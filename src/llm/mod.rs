//! LLM-facing layer: completion backend, personas, intent classification
//!
//! The routing pipeline only ever talks to the backend through
//! [`CompletionService`], so tests can substitute a scripted stub and the
//! HTTP client in [`client`] stays swappable for other providers.

pub mod classifier;
pub mod client;
pub mod parser;
pub mod persona;

use crate::core::error::Result;
use crate::llm::persona::Persona;
use async_trait::async_trait;

pub use classifier::classify_intent;
pub use client::LlmClient;
pub use parser::{parse_decision, Decision, Intent};

/// Opaque completion backend: one persona-scoped instruction in, text out.
///
/// `context` carries output from earlier pipeline steps; `None` for the
/// first (or only) step of a plan. Implementations must tolerate repeated
/// calls and make no determinism guarantee.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn invoke(
        &self,
        persona: &Persona,
        instruction: &str,
        context: Option<&str>,
    ) -> Result<String>;
}
