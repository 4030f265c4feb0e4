//! Session result

use crate::debate::transcript::{DebateTurn, HostInterlude};
use crate::debate::vote::JudgeVote;
use serde::{Deserialize, Serialize};

/// Which participant played which role in a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignments {
    pub affirmative: String,
    pub negative: String,
    pub host: String,
    pub judges: Vec<String>,
}

/// Everything a finished session produced.
///
/// Handed to the caller in memory; the engine keeps no state between
/// sessions. The tally is narrated in the wrap-up interlude rather than
/// recorded as a structured winner field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateResult {
    pub topic: String,
    pub assignments: RoleAssignments,
    pub transcript: Vec<DebateTurn>,
    pub interludes: Vec<HostInterlude>,
    pub judge_votes: Vec<JudgeVote>,
    /// Opaque payload echoed back from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}
