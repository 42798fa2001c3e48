//! Build execution plans from routing decisions
//!
//! The routing table is static and total: every intent maps to exactly one
//! plan shape through an exhaustive match, so an unroutable intent cannot
//! exist. BASIC, CODE, and ONSITE are single-step plans; DRAFT is the sole
//! two-step plan (researcher, then writer).

use crate::llm::parser::Intent;
use crate::llm::persona::Persona;

/// One unit of work: a persona, an instruction, and what it should produce
///
/// Pure data; the instruction already has the query interpolated.
#[derive(Debug, Clone)]
pub struct Step {
    pub persona: Persona,
    pub instruction: String,
    /// Description of the expected output shape, appended to the prompt
    pub expected_output: &'static str,
}

/// Ordered steps for one query, built fresh per decision
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    pub intent: Intent,
    pub steps: Vec<Step>,
}

/// Build the execution plan for an intent
///
/// # Arguments
/// * `intent` - The classified intent
/// * `query` - The user's original query, interpolated into instructions
pub fn build_plan(intent: Intent, query: &str) -> ExecutionPlan {
    let steps = match intent {
        Intent::Basic => vec![Step {
            persona: Persona::explainer(),
            instruction: format!(
                "Answer the following question with a concise, accurate \
                 explanation suitable for technology evaluators: {}",
                query
            ),
            expected_output: "A short, factual, and evaluator-friendly \
                              explanation in 1-3 paragraphs.",
        }],
        Intent::Code => vec![Step {
            persona: Persona::code_recommender(),
            instruction: format!(
                "Recommend relevant industry and technical classification \
                 codes (e.g., KSIC, NTIS) for the following description and \
                 justify briefly: {}",
                query
            ),
            expected_output: "A one-paragraph answer listing the most \
                              probable KSIC and technical codes with a brief \
                              justification.",
        }],
        Intent::Onsite => vec![Step {
            persona: Persona::onsite_inspector(),
            instruction: format!(
                "Provide likely on-site inspection Q&A and a compact \
                 checklist across technical, market, and business aspects \
                 for: {}",
                query
            ),
            expected_output: "3-5 suggested questions with brief model \
                              answers plus a compact checklist.",
        }],
        Intent::Draft => vec![
            Step {
                persona: Persona::researcher(),
                instruction: format!(
                    "Research the topic and context implied by the user's \
                     request focusing on technology, market, competition, \
                     and risks: {}",
                    query
                ),
                expected_output: "A bullet-point research brief covering \
                                  technology overview, differentiators, \
                                  market context, competitors, and key \
                                  risks.",
            },
            Step {
                persona: Persona::writer(),
                instruction: "Using the previous research brief, write a \
                              professional evaluation draft covering \
                              technical feasibility, marketability, business \
                              feasibility, and a concise overall opinion."
                    .to_string(),
                expected_output: "A polished multi-paragraph draft with \
                                  technical, market, and business sections \
                                  and a succinct overall opinion.",
            },
        ],
    };

    ExecutionPlan { intent, steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_intents() {
        for intent in [Intent::Basic, Intent::Code, Intent::Onsite] {
            let plan = build_plan(intent, "lithium battery recycling");
            assert_eq!(plan.intent, intent);
            assert_eq!(plan.steps.len(), 1);
        }
    }

    #[test]
    fn test_draft_is_researcher_then_writer() {
        let plan = build_plan(Intent::Draft, "solid-state battery startup");
        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[0].persona, Persona::researcher());
        assert_eq!(plan.steps[1].persona, Persona::writer());
    }

    #[test]
    fn test_query_interpolated_into_first_step() {
        let query = "graphene-based water filtration";
        for intent in Intent::PRIORITY {
            let plan = build_plan(intent, query);
            assert!(plan.steps[0].instruction.contains(query));
        }
    }

    #[test]
    fn test_draft_writer_step_does_not_embed_query() {
        // The writer works from the researcher's brief, not the raw query
        let plan = build_plan(Intent::Draft, "quantum sensors");
        assert!(!plan.steps[1].instruction.contains("quantum sensors"));
    }

    #[test]
    fn test_plan_personas_match_routing_table() {
        assert_eq!(
            build_plan(Intent::Basic, "q").steps[0].persona,
            Persona::explainer()
        );
        assert_eq!(
            build_plan(Intent::Code, "q").steps[0].persona,
            Persona::code_recommender()
        );
        assert_eq!(
            build_plan(Intent::Onsite, "q").steps[0].persona,
            Persona::onsite_inspector()
        );
    }
}
