pub mod corpus_source;
pub mod embedding;
pub mod language_model;

pub use corpus_source::ICorpusSource;
pub use embedding::IEmbeddingProvider;
pub use language_model::{ILanguageModel, Prompt};
