//! JSON archive for finished debates
//!
//! Each debate is written as one pretty-printed JSON file named with a
//! UTC timestamp and a slug of the topic, so a directory of archives
//! sorts chronologically and stays readable at a glance.

use arena_domain::DebateResult;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const SLUG_MAX_CHARS: usize = 48;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to write archive file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize debate: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes finished debates into a directory
pub struct DebateArchive {
    dir: PathBuf,
}

impl DebateArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save the result, returning the path of the file written.
    /// The archive directory is created if missing.
    pub fn save(&self, result: &DebateResult) -> Result<PathBuf, ArchiveError> {
        std::fs::create_dir_all(&self.dir)?;

        let now = Utc::now();
        let filename = format!(
            "{}_{}.json",
            now.format("%Y%m%d-%H%M%S"),
            slugify(&result.topic)
        );
        let path = self.dir.join(filename);

        let mut document = serde_json::to_value(result)?;
        if let Value::Object(map) = &mut document {
            map.insert(
                "saved_at_utc".into(),
                json!(now.to_rfc3339_opts(SecondsFormat::Micros, true)),
            );
        }

        std::fs::write(&path, serde_json::to_string_pretty(&document)?)?;
        info!(path = %path.display(), "Debate archived");
        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Lowercase ASCII slug of the topic for the filename. Runs of anything
/// other than ASCII letters and digits collapse to a single hyphen.
fn slugify(topic: &str) -> String {
    let mut slug = String::new();
    let mut gap = false;
    for ch in topic.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch.to_ascii_lowercase());
            if slug.chars().count() >= SLUG_MAX_CHARS {
                break;
            }
        } else {
            gap = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("debate");
    }
    slug
}
