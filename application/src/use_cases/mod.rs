//! Application use cases

pub mod run_debate;

pub use run_debate::{RunDebateError, RunDebateUseCase};
