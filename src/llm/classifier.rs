//! Classify a query's intent with a single supervisor call
//!
//! One completion call, no validation, no retries. The raw text comes back
//! as-is; turning it into a usable decision is [`crate::llm::parser`]'s job,
//! including recovery from malformed output.

use crate::core::error::Result;
use crate::llm::persona::Persona;
use crate::llm::CompletionService;

/// Fixed meta-instruction demanding a compact one-line JSON classification
const CLASSIFY_INSTRUCTION: &str = "Given the user query, identify the intent and respond ONLY as \
     a one-line JSON like {\"agent\":\"BASIC|CODE|ONSITE|DRAFT\",\"reason\":\"short reason\"}. \
     Valid agents are BASIC for simple explanations, CODE for classification codes, \
     ONSITE for inspection Q&A, DRAFT for evaluation draft writing.";

/// Ask the completion service to classify a query
///
/// # Arguments
/// * `service` - The completion backend to call
/// * `query` - The user's free-text query
///
/// # Returns
/// The supervisor's raw, unvalidated response text
pub async fn classify_intent<S>(service: &S, query: &str) -> Result<String>
where
    S: CompletionService + ?Sized,
{
    let instruction = format!("{} Query: {}", CLASSIFY_INSTRUCTION, query);
    tracing::debug!(chars = query.len(), "classifying query intent");
    service
        .invoke(&Persona::supervisor(), &instruction, None)
        .await
}
