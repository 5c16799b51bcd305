use std::collections::HashSet;

use proptest::prelude::*;
use verity_core::{Record, RecordId, SearchHit};
use verity_retrieval::CitationAssembler;

fn hits() -> impl Strategy<Value = Vec<SearchHit>> {
    // Small id space so duplicates are common.
    prop::collection::vec((0u32..3, 0u32..4, -1.0f32..1.0), 0..30).prop_map(|raw| {
        raw.into_iter()
            .map(|(c, s, score)| {
                SearchHit::new(Record::new(RecordId::new(c, s), "C", "o", "t"), score + 0.0)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn no_record_appears_twice(input in hits()) {
        let bundle = CitationAssembler::new().assemble(input);
        let mut seen = HashSet::new();
        for hit in bundle.hits() {
            prop_assert!(seen.insert(hit.record_id()));
        }
    }

    #[test]
    fn sorted_by_score_then_id(input in hits()) {
        let bundle = CitationAssembler::new().assemble(input);
        for w in bundle.hits().windows(2) {
            let (a, b) = (&w[0], &w[1]);
            prop_assert!(
                a.similarity_score > b.similarity_score
                    || (a.similarity_score == b.similarity_score && a.record_id() < b.record_id())
            );
        }
    }

    #[test]
    fn sufficient_iff_non_empty(input in hits()) {
        let was_empty = input.is_empty();
        let bundle = CitationAssembler::new().assemble(input);
        prop_assert_eq!(bundle.sufficient(), !was_empty);
        prop_assert_eq!(bundle.sufficient(), !bundle.is_empty());
    }

    #[test]
    fn keeps_max_score_per_record(input in hits()) {
        let bundle = CitationAssembler::new().assemble(input.clone());
        for hit in bundle.hits() {
            let best = input
                .iter()
                .filter(|h| h.record_id() == hit.record_id())
                .map(|h| h.similarity_score)
                .fold(f32::NEG_INFINITY, f32::max);
            prop_assert_eq!(hit.similarity_score, best);
        }
    }

    #[test]
    fn order_of_input_does_not_matter(input in hits()) {
        let mut reversed = input.clone();
        reversed.reverse();
        let a = CitationAssembler::new().assemble(input);
        let b = CitationAssembler::new().assemble(reversed);
        let ids = |bundle: &verity_core::CitationBundle| {
            bundle.hits().iter().map(|h| (h.record_id(), h.similarity_score)).collect::<Vec<_>>()
        };
        prop_assert_eq!(ids(&a), ids(&b));
    }
}
