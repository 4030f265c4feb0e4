//! Verdict parsing
//!
//! Judges are untrusted external text generators. The preferred reply is a
//! structured JudgeOutput JSON object, but the engine must degrade
//! gracefully rather than abort the session when a judge does not comply.
//! [`parse_judge_reply`] is therefore total: every input produces a
//! best-effort `(vote, rationale)` pair, and the origin records which
//! parse path was taken for later audit.

use crate::debate::transcript::Metadata;
use crate::debate::vote::Vote;
use serde_json::Value;

/// Placeholder rationale when the structured summary is empty
const NO_SUMMARY: &str = "Judge did not provide summary.";
/// Placeholder rationale when a legacy reply has no second line
const NO_ELABORATION: &str = "Judge did not elaborate.";
/// Placeholder rationale for an entirely empty reply
const NO_RATIONALE: &str = "No rationale provided.";

/// Why the heuristic tier was used instead of the structured schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The reply was not valid JSON
    UnparsableJson,
    /// The reply was JSON but not an object
    NonObjectJson,
    /// The object's `winner` field was missing or not a known side
    InvalidWinner,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::UnparsableJson => "legacy_text",
            FallbackReason::NonObjectJson => "non_object_json",
            FallbackReason::InvalidWinner => "invalid_winner",
        }
    }
}

/// Which parse path produced a verdict, plus the raw payload for audit
#[derive(Debug, Clone, PartialEq)]
pub enum VerdictOrigin {
    /// Schema-compliant JudgeOutput object
    Structured { raw: Value },
    /// Heuristic line parsing of a non-compliant reply
    Heuristic { reason: FallbackReason, raw: Value },
}

/// A judge's normalized verdict
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedVerdict {
    pub vote: Vote,
    pub rationale: String,
    pub origin: VerdictOrigin,
}

impl ParsedVerdict {
    /// Diagnostic metadata recorded alongside the vote.
    pub fn diagnostics(&self) -> Metadata {
        let mut meta = Metadata::new();
        match &self.origin {
            VerdictOrigin::Structured { raw } => {
                meta.insert("format".to_string(), Value::String("structured".to_string()));
                meta.insert("raw_output".to_string(), raw.clone());
            }
            VerdictOrigin::Heuristic { reason, raw } => {
                meta.insert(
                    "format".to_string(),
                    Value::String(reason.as_str().to_string()),
                );
                meta.insert("raw_output".to_string(), raw.clone());
            }
        }
        meta
    }
}

/// Turn one judge's raw reply into a normalized verdict. Never fails.
pub fn parse_judge_reply(raw: &str) -> ParsedVerdict {
    let decoded: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => {
            return heuristic(
                raw,
                FallbackReason::UnparsableJson,
                Value::String(raw.to_string()),
            );
        }
    };

    let Some(object) = decoded.as_object() else {
        return heuristic(raw, FallbackReason::NonObjectJson, decoded);
    };

    let winner = object
        .get("winner")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .and_then(|label| Vote::from_label(&label));
    let Some(vote) = winner else {
        return heuristic(raw, FallbackReason::InvalidWinner, decoded);
    };

    let summary = match object.get("summary") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Object(block)) => block
            .get("overall")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    };
    let rationale = if summary.is_empty() {
        NO_SUMMARY.to_string()
    } else {
        summary
    };

    ParsedVerdict {
        vote,
        rationale,
        origin: VerdictOrigin::Structured { raw: decoded },
    }
}

/// Legacy tier: first non-empty line decides the vote, second is the rationale.
fn heuristic(raw: &str, reason: FallbackReason, payload: Value) -> ParsedVerdict {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (vote, rationale) = if lines.is_empty() {
        (Vote::Affirmative, NO_RATIONALE.to_string())
    } else {
        let vote = if lines[0].to_lowercase().contains("negative") {
            Vote::Negative
        } else {
            Vote::Affirmative
        };
        let rationale = lines
            .get(1)
            .map(|line| line.to_string())
            .unwrap_or_else(|| NO_ELABORATION.to_string());
        (vote, rationale)
    };

    ParsedVerdict {
        vote,
        rationale,
        origin: VerdictOrigin::Heuristic {
            reason,
            raw: payload,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_with_overall_summary() {
        let raw = r#"{"winner": "negative", "summary": {"overall": "Stronger rebuttals."}}"#;
        let verdict = parse_judge_reply(raw);

        assert_eq!(verdict.vote, Vote::Negative);
        assert_eq!(verdict.rationale, "Stronger rebuttals.");
        assert_eq!(
            verdict.diagnostics().get("format"),
            Some(&json!("structured"))
        );
    }

    #[test]
    fn test_structured_with_plain_summary() {
        let raw = r#"{"winner": "tie", "summary": "Both sides held."}"#;
        let verdict = parse_judge_reply(raw);

        assert_eq!(verdict.vote, Vote::Tie);
        assert_eq!(verdict.rationale, "Both sides held.");
    }

    #[test]
    fn test_structured_uppercase_winner_accepted() {
        let verdict = parse_judge_reply(r#"{"winner": "Affirmative", "summary": "ok"}"#);
        assert_eq!(verdict.vote, Vote::Affirmative);
        assert!(matches!(verdict.origin, VerdictOrigin::Structured { .. }));
    }

    #[test]
    fn test_structured_empty_summary_gets_placeholder() {
        let verdict = parse_judge_reply(r#"{"winner": "affirmative", "summary": ""}"#);
        assert_eq!(verdict.rationale, "Judge did not provide summary.");

        let verdict = parse_judge_reply(r#"{"winner": "affirmative", "summary": {}}"#);
        assert_eq!(verdict.rationale, "Judge did not provide summary.");

        let verdict = parse_judge_reply(r#"{"winner": "affirmative"}"#);
        assert_eq!(verdict.rationale, "Judge did not provide summary.");
    }

    #[test]
    fn test_extra_fields_preserved_in_raw_output() {
        let raw = r#"{"winner": "negative", "summary": "x", "scores": {"logic": 9}}"#;
        let verdict = parse_judge_reply(raw);

        let diagnostics = verdict.diagnostics();
        assert_eq!(
            diagnostics["raw_output"]["scores"]["logic"],
            json!(9)
        );
    }

    #[test]
    fn test_legacy_text_fallback() {
        let verdict = parse_judge_reply("Negative\nThey failed to rebut.");

        assert_eq!(verdict.vote, Vote::Negative);
        assert_eq!(verdict.rationale, "They failed to rebut.");
        assert_eq!(
            verdict.diagnostics().get("format"),
            Some(&json!("legacy_text"))
        );
    }

    #[test]
    fn test_legacy_defaults_to_affirmative() {
        let verdict = parse_judge_reply("The motion carried the day.");
        assert_eq!(verdict.vote, Vote::Affirmative);
        assert_eq!(verdict.rationale, "Judge did not elaborate.");
    }

    #[test]
    fn test_empty_reply() {
        let verdict = parse_judge_reply("   \n  \n");
        assert_eq!(verdict.vote, Vote::Affirmative);
        assert_eq!(verdict.rationale, "No rationale provided.");
    }

    #[test]
    fn test_non_object_json_falls_back() {
        let verdict = parse_judge_reply(r#"["negative", "reasons"]"#);
        assert_eq!(
            verdict.diagnostics().get("format"),
            Some(&json!("non_object_json"))
        );
        // Heuristic runs over the raw text; the word "negative" is on line one.
        assert_eq!(verdict.vote, Vote::Negative);
    }

    #[test]
    fn test_invalid_winner_falls_back() {
        let verdict = parse_judge_reply(r#"{"winner": "draw", "summary": "?"}"#);
        assert_eq!(
            verdict.diagnostics().get("format"),
            Some(&json!("invalid_winner"))
        );
        assert_eq!(verdict.vote, Vote::Affirmative);

        let verdict = parse_judge_reply(r#"{"summary": "missing winner"}"#);
        assert_eq!(
            verdict.diagnostics().get("format"),
            Some(&json!("invalid_winner"))
        );
    }

    #[test]
    fn test_raw_payload_kept_for_audit() {
        let verdict = parse_judge_reply("not json at all");
        assert_eq!(
            verdict.diagnostics().get("raw_output"),
            Some(&json!("not json at all"))
        );
    }
}
