//! Session file loader with default merging

use super::session_file::SessionFile;
use arena_domain::{DebateRequest, DomainError};
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read session file: {0}")]
    File(#[from] Box<figment::Error>),

    #[error("session file has no [host] table")]
    MissingHost,

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Loads a session TOML and turns it into a validated request
pub struct SessionLoader;

impl SessionLoader {
    /// Load a session file, merging built-in defaults underneath it,
    /// and validate the resulting request.
    pub fn load(path: &Path) -> Result<DebateRequest, ConfigError> {
        let session: SessionFile = Figment::new()
            .merge(Serialized::defaults(SessionFile::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)?;

        let request = session.into_request().ok_or(ConfigError::MissingHost)?;
        request.validate()?;
        Ok(request)
    }
}
