//! Output formatting for finished debates

pub mod console;

pub use console::ConsoleFormatter;
