//! Parse raw classifier output into a routing decision
//!
//! The supervisor is asked for single-line JSON, but model output drifts:
//! it may wrap the JSON in prose, emit a bare keyword, or produce nothing
//! usable at all. This parser is total - every input, however malformed,
//! yields exactly one of the four intents. JSON is tried first, then a
//! case-insensitive keyword scan, then the BASIC default.

use serde::{Deserialize, Serialize};

/// The four canonical query categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Simple explanation of a technology or term
    Basic,
    /// Industry/technology classification code recommendation
    Code,
    /// On-site inspection Q&A and checklist
    Onsite,
    /// Two-stage evaluation draft (research, then writing)
    Draft,
}

impl Intent {
    /// Keyword-scan priority order. BASIC outranks CODE outranks ONSITE
    /// outranks DRAFT, independent of where the keywords sit in the text.
    pub const PRIORITY: [Intent; 4] = [Intent::Basic, Intent::Code, Intent::Onsite, Intent::Draft];

    /// Canonical uppercase code for this intent
    pub fn code(&self) -> &'static str {
        match self {
            Intent::Basic => "BASIC",
            Intent::Code => "CODE",
            Intent::Onsite => "ONSITE",
            Intent::Draft => "DRAFT",
        }
    }

    /// Match a code case-insensitively against the closed set
    pub fn from_code(code: &str) -> Option<Intent> {
        let code = code.trim().to_uppercase();
        Intent::PRIORITY.into_iter().find(|i| i.code() == code)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Routing decision extracted from classifier output
///
/// The reason is informational only; routing depends solely on the intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub intent: Intent,
    pub reason: String,
}

/// Extract a routing decision from raw classifier output
///
/// Never fails. Stages, in order:
/// 1. Parse the trimmed text as one JSON object; accept its `agent` field
///    if it names one of the four codes (case-insensitive).
/// 2. Scan the whole text for keywords in [`Intent::PRIORITY`] order; the
///    first candidate found anywhere wins.
/// 3. Default to BASIC.
pub fn parse_decision(raw: &str) -> Decision {
    if let Some(decision) = parse_json_decision(raw) {
        return decision;
    }

    let upper = raw.to_uppercase();
    for intent in Intent::PRIORITY {
        if upper.contains(intent.code()) {
            return Decision {
                intent,
                reason: format!("keyword match on {}", intent.code()),
            };
        }
    }

    Decision {
        intent: Intent::Basic,
        reason: "no recognizable intent, defaulting".to_string(),
    }
}

/// First stage: strict JSON parse of the full (trimmed) text
fn parse_json_decision(raw: &str) -> Option<Decision> {
    let value: serde_json::Value = serde_json::from_str(raw.trim()).ok()?;
    let agent = value.get("agent")?.as_str()?;
    let intent = Intent::from_code(agent)?;
    let reason = value
        .get("reason")
        .and_then(|r| r.as_str())
        .unwrap_or("")
        .to_string();
    Some(Decision { intent, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_decision_uppercase() {
        let d = parse_decision(r#"{"agent":"CODE","reason":"asks for KSIC codes"}"#);
        assert_eq!(d.intent, Intent::Code);
        assert_eq!(d.reason, "asks for KSIC codes");
    }

    #[test]
    fn test_json_decision_lowercase_agent() {
        let d = parse_decision(r#"{"agent":"code","reason":"x"}"#);
        assert_eq!(d.intent, Intent::Code);
    }

    #[test]
    fn test_json_decision_whitespace_padding() {
        let d = parse_decision("  {\"agent\":\"Draft\",\"reason\":\"needs a report\"}\n");
        assert_eq!(d.intent, Intent::Draft);
    }

    #[test]
    fn test_json_missing_reason_defaults_empty() {
        let d = parse_decision(r#"{"agent":"ONSITE"}"#);
        assert_eq!(d.intent, Intent::Onsite);
        assert_eq!(d.reason, "");
    }

    #[test]
    fn test_json_unknown_agent_falls_back_to_scan() {
        // JSON parses but names a fifth code; the keyword scan still finds ONSITE
        let d = parse_decision(r#"{"agent":"TRIAGE","reason":"this is an ONSITE case"}"#);
        assert_eq!(d.intent, Intent::Onsite);
    }

    #[test]
    fn test_keyword_in_prose() {
        let d = parse_decision("I think this is an ONSITE case");
        assert_eq!(d.intent, Intent::Onsite);
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let d = parse_decision("probably draft work");
        assert_eq!(d.intent, Intent::Draft);
    }

    #[test]
    fn test_keyword_priority_beats_position() {
        // DRAFT appears first in the text, but CODE outranks it
        let d = parse_decision("This involves DRAFT work and CODE lookups");
        assert_eq!(d.intent, Intent::Code);
    }

    #[test]
    fn test_all_keywords_present_yields_basic() {
        let d = parse_decision("DRAFT ONSITE CODE BASIC");
        assert_eq!(d.intent, Intent::Basic);
    }

    #[test]
    fn test_no_signal_defaults_to_basic() {
        let d = parse_decision("I'm not sure.");
        assert_eq!(d.intent, Intent::Basic);
    }

    #[test]
    fn test_empty_input_defaults_to_basic() {
        assert_eq!(parse_decision("").intent, Intent::Basic);
    }

    #[test]
    fn test_json_wrapped_in_prose_uses_scan() {
        // Surrounding text breaks the strict JSON stage but not the scan
        let d = parse_decision("Here you go: {\"agent\":\"ONSITE\"} hope that helps");
        assert_eq!(d.intent, Intent::Onsite);
    }

    #[test]
    fn test_intent_code_round_trip() {
        for intent in Intent::PRIORITY {
            assert_eq!(Intent::from_code(intent.code()), Some(intent));
        }
        assert_eq!(Intent::from_code("draft "), Some(Intent::Draft));
        assert_eq!(Intent::from_code("REPORT"), None);
    }

    #[test]
    fn test_intent_serde_codes() {
        assert_eq!(serde_json::to_string(&Intent::Onsite).unwrap(), "\"ONSITE\"");
        let intent: Intent = serde_json::from_str("\"BASIC\"").unwrap();
        assert_eq!(intent, Intent::Basic);
    }
}
