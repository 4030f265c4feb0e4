//! Transcript of recorded utterances
//!
//! [`Transcript`] is an append-only log owned exclusively by the stage
//! sequencer. All read paths are pure projections: they never mutate the
//! log, and calling them twice on an unchanged transcript yields identical
//! output. These projections keep participant prompts bounded regardless
//! of how long the debate runs.

use crate::debate::role::DebateRole;
use serde::{Deserialize, Serialize};

/// Free-form metadata attached to turns, interludes, and votes
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Most recent speaker contents returned per highlight query
const HIGHLIGHT_LIMIT: usize = 4;

/// Character budget for one formatted line in the recent-turns digest
const DIGEST_LINE_BUDGET: usize = 160;

/// Characters of content quoted by [`Transcript::last_said_by`]
const LAST_SAID_SNIPPET: usize = 120;

/// One recorded utterance in the debate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateTurn {
    /// Protocol position, e.g. `opening_affirmative` or `free_debate_round3_negative`
    pub stage: String,
    pub speaker_role: DebateRole,
    pub speaker_name: String,
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Host-only commentary between stages, kept out of the main transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInterlude {
    pub stage: String,
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Append-only ordered log of debate turns.
///
/// The transcript's order is the total order of the debate; a turn is
/// never mutated after append.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<DebateTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one turn. This is the only mutation the transcript supports.
    pub fn append(&mut self, turn: DebateTurn) {
        self.turns.push(turn);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[DebateTurn] {
        &self.turns
    }

    pub fn into_turns(self) -> Vec<DebateTurn> {
        self.turns
    }

    /// Up to [`HIGHLIGHT_LIMIT`] most recent contents authored by `speaker`,
    /// most recent first.
    pub fn highlights_for(&self, speaker: &str) -> Vec<String> {
        self.turns
            .iter()
            .rev()
            .filter(|turn| turn.speaker_name == speaker)
            .take(HIGHLIGHT_LIMIT)
            .map(|turn| turn.content.clone())
            .collect()
    }

    /// Digest of the `limit` most recent turns in chronological order.
    ///
    /// Each entry is formatted `"speaker: content"` and truncated to the
    /// per-line character budget.
    pub fn recent_lines(&self, limit: usize) -> Vec<String> {
        let mut recent: Vec<String> = self
            .turns
            .iter()
            .rev()
            .take(limit)
            .map(|turn| truncate_chars(&format!("{}: {}", turn.speaker_name, turn.content)))
            .collect();
        recent.reverse();
        recent
    }

    /// Content of the most recent turn, or empty if nothing was said yet.
    pub fn last_content(&self) -> String {
        self.turns
            .last()
            .map(|turn| turn.content.clone())
            .unwrap_or_default()
    }

    /// Short summary of the most recent thing `speaker` said.
    pub fn last_said_by(&self, speaker: &str) -> String {
        for turn in self.turns.iter().rev() {
            if turn.speaker_name == speaker {
                let snippet: String = turn.content.chars().take(LAST_SAID_SNIPPET).collect();
                return format!("{speaker} just said: {snippet}");
            }
        }
        format!("{speaker} is preparing to speak.")
    }
}

fn truncate_chars(line: &str) -> String {
    line.chars().take(DIGEST_LINE_BUDGET).collect()
}
