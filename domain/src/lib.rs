//! Domain layer for debate-arena
//!
//! This crate contains the debate protocol's core types and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Protocol
//!
//! A debate is a fixed sequence of stages: opening statements, two
//! cross-examination blocks, free debate rounds, closing statements, and
//! a concurrent judging round — with host interludes between stages.
//!
//! ## Verdict
//!
//! Judges reply with free text. [`parse_judge_reply`] normalizes any reply
//! into a `(vote, rationale)` pair, preferring the structured JudgeOutput
//! schema and degrading to heuristic line parsing instead of failing.

pub mod core;
pub mod debate;
pub mod prompt;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use debate::{
    request::{DebateOptions, DebateRequest, ParticipantSpec},
    result::{DebateResult, RoleAssignments},
    role::DebateRole,
    sides::{SidePair, assign_sides},
    stage::{CrossExamBlock, InterludeStage},
    tally::{Tally, TallyOutcome},
    transcript::{DebateTurn, HostInterlude, Metadata, Transcript},
    verdict::{FallbackReason, ParsedVerdict, VerdictOrigin, parse_judge_reply},
    vote::{JudgeVote, Vote},
};
pub use prompt::PromptTemplate;
