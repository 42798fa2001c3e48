//! Run execution plans strictly in order, threading results forward
//!
//! A plan, once built, runs unconditionally end-to-end: no content-based
//! branching, no early abort, no retry. Every step after the first receives
//! all prior step results as context. The last step's output is the final
//! result; earlier outputs surface only in debug logs.

use crate::core::error::{EvalError, Result};
use crate::llm::CompletionService;
use crate::route::dispatcher::ExecutionPlan;

/// Execute a plan's steps sequentially and return the final step's output
///
/// Any completion-service failure propagates immediately; prior step output
/// is discarded, never returned partially.
pub async fn run_plan<S>(service: &S, plan: &ExecutionPlan) -> Result<String>
where
    S: CompletionService + ?Sized,
{
    let mut results: Vec<String> = Vec::with_capacity(plan.steps.len());

    for (i, step) in plan.steps.iter().enumerate() {
        // Prior results, in order, become this step's context
        let context = if results.is_empty() {
            None
        } else {
            Some(results.join("\n\n"))
        };

        tracing::debug!(
            step = i + 1,
            total = plan.steps.len(),
            role = step.persona.role,
            "running step"
        );

        let instruction = format!(
            "{}\n\nExpected output: {}",
            step.instruction, step.expected_output
        );
        let output = service
            .invoke(&step.persona, &instruction, context.as_deref())
            .await?;

        tracing::debug!(step = i + 1, chars = output.len(), "step complete");
        results.push(output);
    }

    // Unreachable with plans from build_plan, which always emits >= 1 step
    results
        .pop()
        .ok_or_else(|| EvalError::Completion("execution plan had no steps".into()))
}
