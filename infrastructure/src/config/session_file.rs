//! Raw TOML session data types
//!
//! These structs represent the exact structure of the session file.
//! They are deserialized directly and use domain types where appropriate.

use arena_domain::{DebateOptions, DebateRequest, ParticipantSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw debate session from TOML
///
/// Everything except the topic has a sensible default, so a minimal file
/// is just a topic plus the participant tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionFile {
    /// The motion under debate
    pub topic: String,
    /// Exactly two expected; order is pre-assignment
    pub debaters: Vec<ParticipantSpec>,
    /// Five to twelve expected
    pub judges: Vec<ParticipantSpec>,
    /// Moderator for the interludes
    pub host: Option<ParticipantSpec>,
    /// Protocol tuning knobs
    pub options: DebateOptions,
    /// Free-form annotations copied onto the result
    pub metadata: Option<Value>,
}

impl SessionFile {
    /// Convert into a request, requiring the host table to be present.
    /// Count and range validation happens later in the domain.
    pub fn into_request(self) -> Option<DebateRequest> {
        let host = self.host?;
        Some(DebateRequest {
            topic: self.topic,
            debaters: self.debaters,
            judges: self.judges,
            host,
            options: self.options,
            metadata: self.metadata,
        })
    }
}
