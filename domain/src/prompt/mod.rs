//! Prompt templates for the debate flow

pub mod template;

pub use template::PromptTemplate;
