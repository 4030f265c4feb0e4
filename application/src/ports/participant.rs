//! Participant port
//!
//! Every role (debater, host, judge) is reached through the same
//! capability: send one prompt with context, get back text plus metadata.
//! Role-specific behavior lives entirely in the sequencer's prompt
//! construction, never in the client.

use arena_domain::{DebateOptions, Metadata, ParticipantSpec};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by a participant call, after any internal retries
#[derive(Error, Debug)]
pub enum ParticipantError {
    /// The participant answered with a terminal HTTP status
    #[error("{participant} responded with {status}: {body}")]
    Status {
        participant: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response (network failure, timeout)
    #[error("{participant} request failed: {message}")]
    Transport {
        participant: String,
        message: String,
    },

    /// The reply parsed but carried no `content` field
    #[error("{participant} response missing 'content' field")]
    MissingContent { participant: String },

    /// The participant endpoint could not be turned into a client
    #[error("invalid endpoint for {participant}: {message}")]
    InvalidEndpoint {
        participant: String,
        message: String,
    },
}

impl ParticipantError {
    /// Display name of the participant that failed.
    pub fn participant(&self) -> &str {
        match self {
            ParticipantError::Status { participant, .. }
            | ParticipantError::Transport { participant, .. }
            | ParticipantError::MissingContent { participant }
            | ParticipantError::InvalidEndpoint { participant, .. } => participant,
        }
    }
}

/// A successful participant reply
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub metadata: Metadata,
}

/// A callable remote role-player
#[async_trait]
pub trait Participant: Send + Sync {
    /// Display name, used in transcripts and error reports
    fn name(&self) -> &str;

    /// Send one prompt and await the reply.
    ///
    /// Transient failures are retried internally; an `Err` here is
    /// terminal and aborts the session.
    async fn complete(
        &self,
        prompt: &str,
        context: Metadata,
        tags: Option<Metadata>,
    ) -> Result<Completion, ParticipantError>;
}

/// Builds live participant clients from descriptors.
///
/// The sequencer connects every descriptor once at session start; the
/// resulting clients are stateless across calls apart from their configured
/// retry and timeout parameters.
pub trait ParticipantGateway: Send + Sync {
    fn connect(
        &self,
        spec: &ParticipantSpec,
        options: &DebateOptions,
    ) -> Result<Arc<dyn Participant>, ParticipantError>;
}
