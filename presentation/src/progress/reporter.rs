//! Console narration of debate progress
//!
//! Prints each turn, host interlude, and ballot as the sequencer emits
//! it, so a long run is watchable instead of silent until the end.

use arena_application::ports::events::{DebateEvent, EventSink};
use arena_domain::{DebateRole, Vote};
use colored::Colorize;

/// Prints events to stdout as they arrive
pub struct LiveReporter;

impl LiveReporter {
    pub fn new() -> Self {
        Self
    }

    fn role_badge(role: DebateRole) -> colored::ColoredString {
        match role {
            DebateRole::Affirmative => "[affirmative]".green().bold(),
            DebateRole::Negative => "[negative]".red().bold(),
            DebateRole::Host => "[host]".cyan().bold(),
            DebateRole::Judge => "[judge]".yellow().bold(),
        }
    }

    fn vote_badge(vote: Vote) -> colored::ColoredString {
        match vote {
            Vote::Affirmative => "affirmative".green().bold(),
            Vote::Negative => "negative".red().bold(),
            Vote::Tie => "tie".yellow().bold(),
        }
    }
}

impl Default for LiveReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LiveReporter {
    fn emit(&self, event: DebateEvent) {
        match event {
            DebateEvent::Turn(turn) => {
                println!(
                    "\n{} {} {}\n{}",
                    Self::role_badge(turn.speaker_role),
                    turn.speaker_name.bold(),
                    format!("({})", turn.stage).dimmed(),
                    turn.content
                );
            }
            DebateEvent::Interlude(interlude) => {
                println!(
                    "\n{} {}\n{}",
                    "[host]".cyan().bold(),
                    format!("({})", interlude.stage).dimmed(),
                    interlude.content
                );
            }
            DebateEvent::Vote(vote) => {
                println!(
                    "\n{} {} votes {}\n{}",
                    "[ballot]".yellow().bold(),
                    vote.judge_name.bold(),
                    Self::vote_badge(vote.vote),
                    vote.rationale
                );
            }
            DebateEvent::Error { message } => {
                eprintln!("\n{} {}", "[aborted]".red().bold(), message);
            }
        }
    }
}
