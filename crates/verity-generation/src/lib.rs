//! # verity-generation
//!
//! Produces an answer strictly from a citation bundle, or the fixed fallback
//! when the bundle cannot support one.

pub mod generator;
pub mod openai;
pub mod prompt;
pub mod refusal;

pub use generator::GroundedGenerator;
pub use openai::OpenAiChatModel;
pub use prompt::PromptBuilder;
