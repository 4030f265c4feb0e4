//! Debate session configuration
//!
//! A session lives in a TOML file naming the topic and the participants.
//! Loading merges built-in defaults with the file and produces a
//! validated [`arena_domain::DebateRequest`].

pub mod loader;
pub mod session_file;

pub use loader::{ConfigError, SessionLoader};
pub use session_file::SessionFile;
