//! Infrastructure layer for debate-arena
//!
//! Adapters for the application-layer ports: the reqwest-backed
//! participant client with retry/backoff, the TOML session file loader,
//! and the JSON archive for finished debates.

pub mod archive;
pub mod config;
pub mod http;

pub use archive::{ArchiveError, DebateArchive};
pub use config::{ConfigError, SessionLoader};
pub use http::{HttpParticipant, HttpParticipantGateway, RetryPolicy};
