//! Judge votes

use crate::debate::transcript::Metadata;
use serde::{Deserialize, Serialize};

/// A judge's vote on the motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Affirmative,
    Negative,
    Tie,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Affirmative => "affirmative",
            Vote::Negative => "negative",
            Vote::Tie => "tie",
        }
    }

    /// Parse a lowercase winner label from the structured judge schema.
    pub fn from_label(label: &str) -> Option<Vote> {
        match label {
            "affirmative" => Some(Vote::Affirmative),
            "negative" => Some(Vote::Negative),
            "tie" => Some(Vote::Tie),
            _ => None,
        }
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One judge's recorded verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeVote {
    pub judge_name: String,
    pub vote: Vote,
    pub rationale: String,
    /// Diagnostic metadata, including which parse path produced the vote
    #[serde(default)]
    pub metadata: Metadata,
}
