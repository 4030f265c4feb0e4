//! Live narration of a running debate

pub mod reporter;

pub use reporter::LiveReporter;
