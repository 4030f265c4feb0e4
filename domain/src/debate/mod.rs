//! Debate protocol domain
//!
//! This module contains the core concepts of the structured debate protocol.
//!
//! # Core Concepts
//!
//! ## Transcript
//! The append-only record of everything a debater or judge says. The
//! sequencer is its only writer; everything else takes read-only
//! projections ([`Transcript::highlights_for`], [`Transcript::recent_lines`]).
//!
//! ## Sides
//! The two supplied debaters are bound to the affirmative and negative
//! positions by a uniform random permutation at session start and keep
//! those positions for the whole session.
//!
//! ## Verdict
//! Each judge's raw reply is normalized into a [`vote::Vote`] plus a
//! rationale by [`verdict::parse_judge_reply`], which never fails.

pub mod request;
pub mod result;
pub mod role;
pub mod sides;
pub mod stage;
pub mod tally;
pub mod transcript;
pub mod verdict;
pub mod vote;

// Re-export main types
pub use request::{DebateOptions, DebateRequest, ParticipantSpec};
pub use result::{DebateResult, RoleAssignments};
pub use role::DebateRole;
pub use sides::{SidePair, assign_sides};
pub use stage::{CrossExamBlock, InterludeStage};
pub use tally::{Tally, TallyOutcome};
pub use transcript::{DebateTurn, HostInterlude, Metadata, Transcript};
pub use verdict::{FallbackReason, ParsedVerdict, VerdictOrigin, parse_judge_reply};
pub use vote::{JudgeVote, Vote};
