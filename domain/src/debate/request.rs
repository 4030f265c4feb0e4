//! Session configuration
//!
//! A [`DebateRequest`] describes everything a session needs: the motion,
//! the remote participants, and the tunable limits. It is validated once
//! and never mutated after the session starts.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A callable remote role-player: display name plus network endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSpec {
    /// Display name for the participant
    pub name: String,
    /// HTTP endpoint accepting POST requests
    pub endpoint: String,
}

impl ParticipantSpec {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Tunable limits for one debate session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebateOptions {
    /// Questions allowed during each cross-examination block (1..=10)
    pub max_cross_questions: u32,
    /// Free debate rounds, each with two turns (1..=12)
    pub max_freeform_rounds: u32,
    /// Timeout for each participant call, in seconds (5..=120)
    pub request_timeout_seconds: u64,
}

impl Default for DebateOptions {
    fn default() -> Self {
        Self {
            max_cross_questions: 5,
            max_freeform_rounds: 10,
            request_timeout_seconds: 45,
        }
    }
}

impl DebateOptions {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(1..=10).contains(&self.max_cross_questions) {
            return Err(DomainError::InvalidOption(format!(
                "max_cross_questions must be in 1..=10, got {}",
                self.max_cross_questions
            )));
        }
        if !(1..=12).contains(&self.max_freeform_rounds) {
            return Err(DomainError::InvalidOption(format!(
                "max_freeform_rounds must be in 1..=12, got {}",
                self.max_freeform_rounds
            )));
        }
        if !(5..=120).contains(&self.request_timeout_seconds) {
            return Err(DomainError::InvalidOption(format!(
                "request_timeout_seconds must be in 5..=120, got {}",
                self.request_timeout_seconds
            )));
        }
        Ok(())
    }
}

/// Immutable description of one debate session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateRequest {
    /// The motion under debate
    pub topic: String,
    /// Exactly two debaters, randomly assigned to sides at session start
    pub debaters: Vec<ParticipantSpec>,
    /// Between 5 and 12 judges that will cast votes
    pub judges: Vec<ParticipantSpec>,
    /// The host delivering interludes
    pub host: ParticipantSpec,
    #[serde(default)]
    pub options: DebateOptions,
    /// Optional opaque payload echoed back in the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl DebateRequest {
    /// Check participant counts and option ranges.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.topic.trim().is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        if self.debaters.len() != 2 {
            return Err(DomainError::DebaterCount(self.debaters.len()));
        }
        if !(5..=12).contains(&self.judges.len()) {
            return Err(DomainError::JudgeCount(self.judges.len()));
        }
        self.options.validate()
    }
}
