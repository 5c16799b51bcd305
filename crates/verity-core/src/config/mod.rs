//! Configuration for the pipeline.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod cache_config;
pub mod corpus_config;
pub mod defaults;
pub mod embedding_config;
pub mod generation_config;
pub mod index_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod verity_config;

pub use cache_config::CacheConfig;
pub use corpus_config::CorpusConfig;
pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use index_config::IndexConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use verity_config::VerityConfig;
