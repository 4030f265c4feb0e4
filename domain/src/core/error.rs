//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Exactly two debaters are required, got {0}")]
    DebaterCount(usize),

    #[error("Between 5 and 12 judges are required, got {0}")]
    JudgeCount(usize),

    #[error("Debate topic must not be empty")]
    EmptyTopic,

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}
