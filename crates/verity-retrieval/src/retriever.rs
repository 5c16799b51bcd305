use std::sync::Arc;

use tracing::debug;
use verity_core::errors::{CorpusInconsistencyError, VerityResult};
use verity_core::{CitationBundle, RecordId, SearchHit};
use verity_corpus::{ContextExpander, CorpusStore};
use verity_index::SharedIndex;

use crate::assembler::CitationAssembler;

/// Runs the retrieval stages against the shared corpus and index.
///
/// Each stage is exposed on its own so callers can trace transitions;
/// [`Retriever::retrieve`] chains them.
#[derive(Debug, Clone)]
pub struct Retriever {
    corpus: Arc<CorpusStore>,
    index: Arc<SharedIndex>,
    expander: ContextExpander,
    assembler: CitationAssembler,
}

impl Retriever {
    pub fn new(corpus: Arc<CorpusStore>, index: Arc<SharedIndex>) -> Self {
        Self {
            expander: ContextExpander::new(Arc::clone(&corpus)),
            corpus,
            index,
            assembler: CitationAssembler::new(),
        }
    }

    /// Top-`k` raw hits. Fails with `IndexError::NotLoaded` until the index is installed.
    pub fn search(
        &self,
        query: &[f32],
        k: usize,
        score_threshold: Option<f32>,
    ) -> VerityResult<Vec<(RecordId, f32)>> {
        let index = self.index.get()?;
        let hits = index.search(query, k, score_threshold)?;
        debug!(hits = hits.len(), k, ?score_threshold, "index search complete");
        Ok(hits)
    }

    /// Resolve raw hits against the corpus and attach their neighbors.
    pub fn expand(&self, raw: &[(RecordId, f32)], window: usize) -> VerityResult<Vec<SearchHit>> {
        raw.iter()
            .map(|&(id, score)| -> VerityResult<SearchHit> {
                let record = self.corpus.get(id).cloned().ok_or_else(|| {
                    CorpusInconsistencyError::MissingRecord {
                        record_id: id.to_string(),
                    }
                })?;
                let context = self.expander.expand(id, window)?;
                Ok(SearchHit::new(record, score).with_context(context))
            })
            .collect()
    }

    pub fn assemble(&self, hits: Vec<SearchHit>) -> CitationBundle {
        self.assembler.assemble(hits)
    }

    /// search → expand → assemble.
    pub fn retrieve(
        &self,
        query: &[f32],
        k: usize,
        score_threshold: Option<f32>,
        window: usize,
    ) -> VerityResult<CitationBundle> {
        let raw = self.search(query, k, score_threshold)?;
        let hits = self.expand(&raw, window)?;
        Ok(self.assemble(hits))
    }

    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }

    pub fn index(&self) -> &SharedIndex {
        &self.index
    }
}
