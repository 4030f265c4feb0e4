//! Ports (interfaces) for external dependencies
//!
//! Following hexagonal architecture, these traits define what the
//! application layer needs; adapters live in outer layers.

pub mod events;
pub mod participant;
