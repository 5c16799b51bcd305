//! # verity-corpus
//!
//! Immutable corpus store keyed by [`RecordId`](verity_core::RecordId), the
//! JSON corpus source, and the context expander that fetches sequential
//! neighbors within a collection.

pub mod expander;
pub mod searchable;
pub mod source;
pub mod store;

pub use expander::ContextExpander;
pub use searchable::searchable_text;
pub use source::{parse_corpus_json, JsonCorpusSource};
pub use store::CorpusStore;
