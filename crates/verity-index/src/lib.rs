//! # verity-index
//!
//! Exact (brute-force) cosine similarity index over the corpus embeddings.
//!
//! - [`FlatIndex`]: normalized vectors aligned 1:1 with record ids in build order
//! - [`IndexBuilder`]: embeds the corpus in parallel batches
//! - [`SharedIndex`]: write-once readiness slot; queries fail until it is filled
//! - [`persist`]: binary save/load with model and corpus fingerprint checks

pub mod builder;
pub mod flat;
pub mod persist;
pub mod shared;

pub use builder::IndexBuilder;
pub use flat::FlatIndex;
pub use shared::SharedIndex;
