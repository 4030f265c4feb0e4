//! Application layer for debate-arena
//!
//! Contains the ports (participant gateway, event sink) and the
//! `RunDebate` use case that drives the full protocol end-to-end.
//! Implementations of the ports live in the infrastructure and
//! presentation layers.

pub mod ports;
pub mod use_cases;

pub use ports::events::{ChannelSink, DebateEvent, EventSink, NoEvents};
pub use ports::participant::{Completion, Participant, ParticipantError, ParticipantGateway};
pub use use_cases::run_debate::{RunDebateError, RunDebateUseCase};
