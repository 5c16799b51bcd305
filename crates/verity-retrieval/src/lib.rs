//! # verity-retrieval
//!
//! Query vector → ranked, deduplicated citations.
//! [`Retriever`] runs index search and context expansion;
//! [`CitationAssembler`] ranks, deduplicates and decides sufficiency.

pub mod assembler;
pub mod retriever;

pub use assembler::CitationAssembler;
pub use retriever::Retriever;
