//! Live progress events
//!
//! The sequencer can report each turn, interlude, and vote as it is
//! produced. Emission is optional and side-effect-free with respect to the
//! session result: a consumer may abandon the channel without affecting
//! the run, and the run never waits on the consumer.

use arena_domain::{DebateTurn, HostInterlude, JudgeVote};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// One progress event, in transcript order.
///
/// The stream is terminated by closing the channel: after an aborting
/// `Error` event (or the final vote of a successful run) the sender is
/// dropped and the consumer observes end-of-stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum DebateEvent {
    Turn(DebateTurn),
    Interlude(HostInterlude),
    Vote(JudgeVote),
    Error { message: String },
}

/// Where progress events go
pub trait EventSink: Send + Sync {
    fn emit(&self, event: DebateEvent);
}

/// No-op sink for when progress reporting is not needed
pub struct NoEvents;

impl EventSink for NoEvents {
    fn emit(&self, _event: DebateEvent) {}
}

/// Sink that forwards events into a tokio channel.
///
/// Send failures are ignored: a dropped receiver must not abort the run.
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<DebateEvent>,
}

impl ChannelSink {
    pub fn new(sender: mpsc::UnboundedSender<DebateEvent>) -> Self {
        Self { sender }
    }

    /// Convenience constructor returning the sink and its receiver.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DebateEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: DebateEvent) {
        let _ = self.sender.send(event);
    }
}
