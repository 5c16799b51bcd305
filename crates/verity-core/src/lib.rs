//! # verity-core
//!
//! Foundation crate for the Verity grounded question-answering pipeline.
//! Defines the record and citation models, the seams the pipeline is built
//! on (encoder, language model, corpus source), the error taxonomy, and the
//! layered configuration. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerityConfig;
pub use errors::{ErrorKind, VerityError, VerityResult};
pub use models::{CitationBundle, QueryRequest, QueryResult, Record, RecordId, SearchHit};
