//! HTTP participant adapter

pub mod participant;
pub mod retry;

pub use participant::{HttpParticipant, HttpParticipantGateway};
pub use retry::RetryPolicy;
