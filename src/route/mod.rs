//! Query routing pipeline
//!
//! Query -> classify -> parse -> dispatch -> execute:
//! one supervisor call decides the intent, the parser recovers a decision
//! from whatever came back, the dispatcher builds the plan, and the
//! executor runs it to a single final text.

pub mod dispatcher;
pub mod executor;

pub use dispatcher::{build_plan, ExecutionPlan, Step};
pub use executor::run_plan;

use crate::core::error::Result;
use crate::llm::classifier::classify_intent;
use crate::llm::parser::{parse_decision, Decision};
use crate::llm::CompletionService;

/// Route one query end-to-end and return the final result text
///
/// The decision is computed once per query; the plan is built fresh from it
/// and discarded after the run. Nothing persists across queries.
pub async fn handle_query<S>(service: &S, query: &str) -> Result<(Decision, String)>
where
    S: CompletionService + ?Sized,
{
    let raw = classify_intent(service, query).await?;
    tracing::debug!(raw = %raw, "classifier output");

    let decision = parse_decision(&raw);
    tracing::info!(intent = %decision.intent, reason = %decision.reason, "routing decision");

    let plan = build_plan(decision.intent, query);
    tracing::info!(intent = %plan.intent, steps = plan.steps.len(), "executing plan");

    let result = run_plan(service, &plan).await?;
    Ok((decision, result))
}
