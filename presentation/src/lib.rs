//! Presentation layer for debate-arena
//!
//! This crate contains the CLI definitions, the console formatter for
//! finished debates, and the live event reporter that narrates a run as
//! it happens.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::LiveReporter;
