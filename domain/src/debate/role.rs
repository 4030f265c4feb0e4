//! Protocol roles

use serde::{Deserialize, Serialize};

/// A role in the debate protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebateRole {
    /// Argues for the motion
    Affirmative,
    /// Argues against the motion
    Negative,
    /// Delivers interludes between stages
    Host,
    /// Casts a vote after the debate
    Judge,
}

impl DebateRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateRole::Affirmative => "affirmative",
            DebateRole::Negative => "negative",
            DebateRole::Host => "host",
            DebateRole::Judge => "judge",
        }
    }

    /// The debater role on the opposite side, if any
    pub fn opponent(&self) -> Option<DebateRole> {
        match self {
            DebateRole::Affirmative => Some(DebateRole::Negative),
            DebateRole::Negative => Some(DebateRole::Affirmative),
            _ => None,
        }
    }
}

impl std::fmt::Display for DebateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
