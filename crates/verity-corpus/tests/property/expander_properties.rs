use std::sync::Arc;

use proptest::prelude::*;
use verity_core::RecordId;
use verity_corpus::{ContextExpander, CorpusStore};

fn expander_for(sizes: &[u32]) -> ContextExpander {
    let store = CorpusStore::from_records(test_fixtures::synthetic_records(sizes)).unwrap();
    ContextExpander::new(Arc::new(store))
}

proptest! {
    #[test]
    fn never_crosses_collection_boundary(
        sizes in prop::collection::vec(1u32..12, 1..5),
        pick in any::<prop::sample::Index>(),
        window in 0usize..20,
    ) {
        let expander = expander_for(&sizes);
        let collection = pick.index(sizes.len()) as u32 + 1;
        let sequence = sizes[collection as usize - 1];
        let ctx = expander.expand(RecordId::new(collection, sequence), window).unwrap();
        for record in &ctx {
            prop_assert_eq!(record.id.collection, collection);
        }
        prop_assert!(ctx.len() <= 2 * window);
    }

    #[test]
    fn context_is_ascending_and_excludes_self(
        size in 1u32..30,
        sequence_seed in any::<prop::sample::Index>(),
        window in 0usize..10,
    ) {
        let expander = expander_for(&[size]);
        let id = RecordId::new(1, sequence_seed.index(size as usize) as u32 + 1);
        let ctx = expander.expand(id, window).unwrap();
        prop_assert!(ctx.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert!(ctx.iter().all(|r| r.id != id));
    }

    #[test]
    fn growing_window_only_accumulates(
        size in 1u32..30,
        sequence_seed in any::<prop::sample::Index>(),
        window in 0usize..10,
        extra in 0usize..10,
    ) {
        let expander = expander_for(&[size, 3]);
        let id = RecordId::new(1, sequence_seed.index(size as usize) as u32 + 1);
        let small = expander.expand(id, window).unwrap();
        let large = expander.expand(id, window + extra).unwrap();
        for record in &small {
            prop_assert!(large.iter().any(|r| r.id == record.id));
        }
        if window == 0 {
            prop_assert!(small.is_empty());
        }
    }

    #[test]
    fn first_record_has_no_predecessor(size in 1u32..20, window in 0usize..50) {
        let expander = expander_for(&[4, size]);
        let ctx = expander.expand(RecordId::new(2, 1), window).unwrap();
        prop_assert!(ctx.iter().all(|r| r.id.sequence > 1 && r.id.collection == 2));
    }
}
