//! # verity-embeddings
//!
//! Turns text into fixed-length, L2-normalized vectors under a single model.
//! [`EmbeddingEngine`] wraps one provider with input validation,
//! normalization and a query cache, and implements `IEmbeddingProvider`.

pub mod cache;
pub mod engine;
pub mod normalize;
pub mod providers;

pub use engine::EmbeddingEngine;
