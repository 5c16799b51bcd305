//! Citation assembly: the gate deciding whether an answer may be attempted.

use std::cmp::Ordering;
use std::collections::HashSet;

use verity_core::{CitationBundle, SearchHit};

#[derive(Debug, Default, Clone, Copy)]
pub struct CitationAssembler;

impl CitationAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Rank and deduplicate `hits` into a bundle.
    ///
    /// 1. Sort by descending score, ties by ascending record id.
    /// 2. Keep the first (highest-scored) hit per record id.
    /// 3. The bundle is sufficient iff at least one hit survives.
    pub fn assemble(&self, mut hits: Vec<SearchHit>) -> CitationBundle {
        hits.sort_by(rank);
        let mut seen = HashSet::with_capacity(hits.len());
        hits.retain(|hit| seen.insert(hit.record_id()));
        CitationBundle::from_ranked(hits)
    }
}

fn rank(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.similarity_score
        .total_cmp(&a.similarity_score)
        .then_with(|| a.record_id().cmp(&b.record_id()))
}

#[cfg(test)]
mod tests {
    use verity_core::{Record, RecordId};

    use super::*;

    fn hit(c: u32, s: u32, score: f32) -> SearchHit {
        SearchHit::new(Record::new(RecordId::new(c, s), "C", "o", "t"), score)
    }

    fn ids(bundle: &CitationBundle) -> Vec<(u32, u32)> {
        bundle
            .hits()
            .iter()
            .map(|h| (h.record_id().collection, h.record_id().sequence))
            .collect()
    }

    #[test]
    fn empty_input_is_insufficient() {
        let bundle = CitationAssembler::new().assemble(vec![]);
        assert!(!bundle.sufficient());
        assert!(bundle.is_empty());
    }

    #[test]
    fn single_hit_is_sufficient_regardless_of_score() {
        let bundle = CitationAssembler::new().assemble(vec![hit(1, 1, -0.3)]);
        assert!(bundle.sufficient());
    }

    #[test]
    fn duplicates_keep_highest_score() {
        let low = hit(1, 1, 0.2);
        let high = hit(1, 1, 0.8).with_context(vec![Record::new(
            RecordId::new(1, 2),
            "C",
            "o",
            "t",
        )]);
        let bundle = CitationAssembler::new().assemble(vec![low, hit(2, 1, 0.5), high]);
        assert_eq!(ids(&bundle), vec![(1, 1), (2, 1)]);
        assert_eq!(bundle.hits()[0].similarity_score, 0.8);
        assert_eq!(bundle.hits()[0].context.len(), 1);
    }

    #[test]
    fn ties_break_on_ascending_record_id() {
        let bundle =
            CitationAssembler::new().assemble(vec![hit(2, 1, 0.5), hit(1, 9, 0.5), hit(1, 3, 0.5)]);
        assert_eq!(ids(&bundle), vec![(1, 3), (1, 9), (2, 1)]);
    }
}
