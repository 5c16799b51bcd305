use std::cmp::Ordering;

use rayon::prelude::*;
use verity_core::config::defaults::DEFAULT_PARALLEL_THRESHOLD;
use verity_core::errors::{CorpusInconsistencyError, IndexError, VerityResult};
use verity_core::RecordId;
use verity_embeddings::normalize::{dot, l2_normalize};

/// Immutable exact-search index.
///
/// Row `i` of `vectors` is the unit-length embedding of `ids[i]`. Safe for
/// any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimensions: usize,
    model: String,
    corpus_fingerprint: String,
    ids: Vec<RecordId>,
    /// Row-major, `ids.len() * dimensions` floats.
    vectors: Vec<f32>,
    parallel_threshold: usize,
}

impl FlatIndex {
    /// Build from per-record vectors, normalizing each one.
    pub fn from_vectors(
        model: impl Into<String>,
        corpus_fingerprint: impl Into<String>,
        dimensions: usize,
        ids: Vec<RecordId>,
        vectors: Vec<Vec<f32>>,
    ) -> Result<Self, IndexError> {
        if ids.len() != vectors.len() {
            return Err(IndexError::Format {
                path: "<build>".to_string(),
                reason: format!("{} ids for {} vectors", ids.len(), vectors.len()),
            });
        }

        let mut flat = Vec::with_capacity(ids.len() * dimensions);
        for (id, mut vector) in ids.iter().zip(vectors) {
            if vector.len() != dimensions {
                return Err(IndexError::DimensionMismatch {
                    expected: dimensions,
                    actual: vector.len(),
                });
            }
            if !l2_normalize(&mut vector) {
                return Err(IndexError::DegenerateVector {
                    record_id: id.to_string(),
                });
            }
            flat.extend_from_slice(&vector);
        }

        Self::from_raw_parts(model.into(), corpus_fingerprint.into(), dimensions, ids, flat)
    }

    /// Assemble from already-normalized, row-major data (used when loading from disk).
    pub(crate) fn from_raw_parts(
        model: String,
        corpus_fingerprint: String,
        dimensions: usize,
        ids: Vec<RecordId>,
        vectors: Vec<f32>,
    ) -> Result<Self, IndexError> {
        if dimensions == 0 || ids.len().checked_mul(dimensions) != Some(vectors.len()) {
            return Err(IndexError::Format {
                path: "<build>".to_string(),
                reason: format!(
                    "{} floats cannot hold {} vectors of {dimensions} dimensions",
                    vectors.len(),
                    ids.len()
                ),
            });
        }
        Ok(Self {
            dimensions,
            model,
            corpus_fingerprint,
            ids,
            vectors,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    /// Score in parallel once the index holds at least this many vectors.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Top-`k` records by cosine similarity, highest first.
    ///
    /// The query is normalized here, so callers may pass raw vectors. Hits
    /// scoring below `score_threshold` are dropped; an empty result is valid.
    /// Equal scores are ordered by ascending record id. Fewer than `k`
    /// vectors means every vector is returned.
    pub fn search(
        &self,
        query: &[f32],
        k: usize,
        score_threshold: Option<f32>,
    ) -> Result<Vec<(RecordId, f32)>, IndexError> {
        if query.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }
        let mut query = query.to_vec();
        if !l2_normalize(&mut query) {
            return Err(IndexError::ZeroNormQuery);
        }
        if k == 0 || self.ids.is_empty() {
            return Ok(Vec::new());
        }

        let scores: Vec<f32> = if self.ids.len() >= self.parallel_threshold {
            self.vectors
                .par_chunks_exact(self.dimensions)
                .map(|row| dot(&query, row))
                .collect()
        } else {
            self.vectors
                .chunks_exact(self.dimensions)
                .map(|row| dot(&query, row))
                .collect()
        };

        let mut hits: Vec<(RecordId, f32)> = self
            .ids
            .iter()
            .copied()
            .zip(scores)
            .filter(|&(_, score)| score_threshold.map_or(true, |t| score >= t))
            .collect();

        let by_rank = |a: &(RecordId, f32), b: &(RecordId, f32)| -> Ordering {
            b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
        };
        if hits.len() > k {
            hits.select_nth_unstable_by(k - 1, by_rank);
            hits.truncate(k);
        }
        hits.sort_unstable_by(by_rank);
        Ok(hits)
    }

    /// Check that this index was built from `corpus_fingerprint` with `model`.
    pub fn verify(
        &self,
        model: &str,
        corpus_fingerprint: &str,
        corpus_len: usize,
    ) -> VerityResult<()> {
        if self.model != model {
            return Err(IndexError::ModelMismatch {
                expected: self.model.clone(),
                actual: model.to_string(),
            }
            .into());
        }
        if self.ids.len() != corpus_len {
            return Err(CorpusInconsistencyError::CountMismatch {
                index: self.ids.len(),
                corpus: corpus_len,
            }
            .into());
        }
        if self.corpus_fingerprint != corpus_fingerprint {
            return Err(CorpusInconsistencyError::FingerprintMismatch {
                index: self.corpus_fingerprint.clone(),
                corpus: corpus_fingerprint.to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn corpus_fingerprint(&self) -> &str {
        &self.corpus_fingerprint
    }

    /// Record ids in build order.
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub(crate) fn raw_vectors(&self) -> &[f32] {
        &self.vectors
    }
}
