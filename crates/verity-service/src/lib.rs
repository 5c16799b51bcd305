//! # verity
//!
//! Grounded question answering over a fixed corpus.
//!
//! [`QueryService::answer_query`] is the whole upward surface: it encodes the
//! question, searches the vector index, expands each hit with its neighbors,
//! assembles the citations and asks the language model for an answer bound
//! to them. [`bootstrap`] wires the pieces together from a [`VerityConfig`].
//!
//! [`VerityConfig`]: verity_core::VerityConfig

pub mod bootstrap;
pub mod cache;
pub mod health;
pub mod service;
pub mod stage;
pub mod tracing_setup;

pub use bootstrap::{bootstrap, bootstrap_with, load_or_build_index};
pub use cache::ResultCache;
pub use health::{HealthReport, HealthStatus};
pub use service::QueryService;
pub use stage::QueryStage;
