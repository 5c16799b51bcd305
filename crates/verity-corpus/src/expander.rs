use std::sync::Arc;

use verity_core::errors::CorpusInconsistencyError;
use verity_core::{Record, RecordId};

use crate::store::CorpusStore;

/// Fetches the sequential neighbors of a record within its own collection.
#[derive(Debug, Clone)]
pub struct ContextExpander {
    corpus: Arc<CorpusStore>,
}

impl ContextExpander {
    pub fn new(corpus: Arc<CorpusStore>) -> Self {
        Self { corpus }
    }

    /// Up to `window` neighbors on each side of `id`, ascending by sequence,
    /// never including `id` itself or records from another collection.
    ///
    /// `window == 0` yields nothing. An id unknown to the corpus means the
    /// index and corpus have drifted apart.
    pub fn expand(
        &self,
        id: RecordId,
        window: usize,
    ) -> Result<Vec<Record>, CorpusInconsistencyError> {
        if !self.corpus.contains(id) {
            return Err(CorpusInconsistencyError::MissingRecord {
                record_id: id.to_string(),
            });
        }
        if window == 0 {
            return Ok(Vec::new());
        }

        let window = u32::try_from(window).unwrap_or(u32::MAX);
        let from = id.sequence.saturating_sub(window);
        let to = id.sequence.saturating_add(window);

        Ok(self
            .corpus
            .range_in_collection(id.collection, from, to)
            .into_iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Arc<CorpusStore> {
        let records = [(1, 1), (1, 2), (1, 3), (1, 4), (2, 1), (2, 2)]
            .into_iter()
            .map(|(c, s)| Record::new(RecordId::new(c, s), "C", "text", "text"))
            .collect();
        Arc::new(CorpusStore::from_records(records).unwrap())
    }

    fn seqs(records: &[Record]) -> Vec<(u32, u32)> {
        records
            .iter()
            .map(|r| (r.id.collection, r.id.sequence))
            .collect()
    }

    #[test]
    fn window_zero_is_empty() {
        let expander = ContextExpander::new(store());
        assert!(expander.expand(RecordId::new(1, 2), 0).unwrap().is_empty());
    }

    #[test]
    fn neighbors_are_ascending_and_exclude_self() {
        let expander = ContextExpander::new(store());
        let ctx = expander.expand(RecordId::new(1, 2), 1).unwrap();
        assert_eq!(seqs(&ctx), vec![(1, 1), (1, 3)]);
    }

    #[test]
    fn first_record_has_no_previous_neighbor() {
        let expander = ContextExpander::new(store());
        let ctx = expander.expand(RecordId::new(2, 1), 5).unwrap();
        assert_eq!(seqs(&ctx), vec![(2, 2)]);
    }

    #[test]
    fn last_record_does_not_spill_into_next_collection() {
        let expander = ContextExpander::new(store());
        let ctx = expander.expand(RecordId::new(1, 4), 2).unwrap();
        assert_eq!(seqs(&ctx), vec![(1, 2), (1, 3)]);
    }

    #[test]
    fn huge_window_is_clamped() {
        let expander = ContextExpander::new(store());
        let ctx = expander.expand(RecordId::new(1, 1), usize::MAX).unwrap();
        assert_eq!(ctx.len(), 3);
    }

    #[test]
    fn unknown_id_is_an_inconsistency() {
        let expander = ContextExpander::new(store());
        let err = expander.expand(RecordId::new(7, 7), 1).unwrap_err();
        assert!(matches!(err, CorpusInconsistencyError::MissingRecord { .. }));
    }
}
