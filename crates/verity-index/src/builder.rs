use rayon::prelude::*;
use tracing::{debug, info};
use verity_core::errors::VerityResult;
use verity_core::traits::IEmbeddingProvider;
use verity_corpus::{searchable_text, CorpusStore};

use crate::flat::FlatIndex;

/// Embeds every corpus record and packs the vectors into a [`FlatIndex`].
///
/// Batches run on rayon; row order always follows corpus order.
pub struct IndexBuilder<'a> {
    encoder: &'a dyn IEmbeddingProvider,
    batch_size: usize,
    parallel_threshold: Option<usize>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(encoder: &'a dyn IEmbeddingProvider) -> Self {
        Self {
            encoder,
            batch_size: verity_core::config::defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            parallel_threshold: None,
        }
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    pub fn build(&self, corpus: &CorpusStore) -> VerityResult<FlatIndex> {
        let texts: Vec<String> = corpus.iter().map(searchable_text).collect();
        let ids = corpus.iter().map(|r| r.id).collect();

        let batches = texts
            .par_chunks(self.batch_size)
            .map(|chunk| -> VerityResult<Vec<Vec<f32>>> {
                let vectors = self.encoder.embed_batch(chunk)?;
                debug!(batch = chunk.len(), "embedded corpus batch");
                Ok(vectors)
            })
            .collect::<VerityResult<Vec<_>>>()?;
        let vectors: Vec<Vec<f32>> = batches.into_iter().flatten().collect();

        let mut index = FlatIndex::from_vectors(
            self.encoder.name(),
            corpus.fingerprint(),
            self.encoder.dimensions(),
            ids,
            vectors,
        )?;
        if let Some(threshold) = self.parallel_threshold {
            index = index.with_parallel_threshold(threshold);
        }

        info!(
            records = index.len(),
            dims = index.dimensions(),
            model = self.encoder.name(),
            "vector index built"
        );
        Ok(index)
    }
}
