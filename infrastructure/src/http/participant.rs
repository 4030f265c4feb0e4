//! reqwest-backed participant client
//!
//! One POST per `complete` call, carrying the prompt, a context map, the
//! client-name tag, and optional extra tags. Any status at or above 400 is
//! a failure; transient statuses and network errors are retried with
//! exponential backoff before the error becomes terminal.

use crate::http::retry::{RetryPolicy, is_retriable_status};
use arena_application::ports::participant::{
    Completion, Participant, ParticipantError, ParticipantGateway,
};
use arena_domain::{DebateOptions, Metadata, ParticipantSpec};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    context: &'a Metadata,
    client: ClientTag<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a Metadata>,
}

#[derive(Serialize)]
struct ClientTag<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct CompletionReply {
    content: Option<String>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

/// HTTP adapter for one remote participant.
///
/// Stateless across calls apart from the configured retry and timeout
/// parameters.
pub struct HttpParticipant {
    name: String,
    endpoint: String,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl HttpParticipant {
    pub fn new(spec: &ParticipantSpec, options: &DebateOptions) -> Result<Self, ParticipantError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.request_timeout_seconds))
            .build()
            .map_err(|error| ParticipantError::InvalidEndpoint {
                participant: spec.name.clone(),
                message: error.to_string(),
            })?;

        Ok(Self {
            name: spec.name.clone(),
            endpoint: spec.endpoint.clone(),
            client,
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[async_trait]
impl Participant for HttpParticipant {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        prompt: &str,
        context: Metadata,
        tags: Option<Metadata>,
    ) -> Result<Completion, ParticipantError> {
        let payload = CompletionRequest {
            prompt,
            context: &context,
            client: ClientTag { name: &self.name },
            tags: tags.as_ref(),
        };

        let mut attempt = 0u32;
        loop {
            let (retriable, error) =
                match self.client.post(&self.endpoint).json(&payload).send().await {
                    Ok(response) => {
                        let status = response.status().as_u16();
                        if status < 400 {
                            let reply: CompletionReply = response.json().await.map_err(|error| {
                                ParticipantError::Transport {
                                    participant: self.name.clone(),
                                    message: format!("malformed reply: {error}"),
                                }
                            })?;
                            let content =
                                reply
                                    .content
                                    .ok_or_else(|| ParticipantError::MissingContent {
                                        participant: self.name.clone(),
                                    })?;
                            return Ok(Completion {
                                content,
                                metadata: reply.metadata.unwrap_or_default(),
                            });
                        }
                        let body = response.text().await.unwrap_or_default();
                        (
                            is_retriable_status(status),
                            ParticipantError::Status {
                                participant: self.name.clone(),
                                status,
                                body,
                            },
                        )
                    }
                    Err(error) => (
                        true,
                        ParticipantError::Transport {
                            participant: self.name.clone(),
                            message: error.to_string(),
                        },
                    ),
                };

            if retriable && attempt < self.retry.max_retries {
                let delay = self.retry.delay_for(attempt);
                warn!(
                    participant = %self.name,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    %error,
                    "Transient participant failure, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }
            return Err(error);
        }
    }
}

/// Builds [`HttpParticipant`] clients for the sequencer
#[derive(Default)]
pub struct HttpParticipantGateway {
    retry: RetryPolicy,
}

impl HttpParticipantGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl ParticipantGateway for HttpParticipantGateway {
    fn connect(
        &self,
        spec: &ParticipantSpec,
        options: &DebateOptions,
    ) -> Result<Arc<dyn Participant>, ParticipantError> {
        Ok(Arc::new(
            HttpParticipant::new(spec, options)?.with_retry(self.retry),
        ))
    }
}
