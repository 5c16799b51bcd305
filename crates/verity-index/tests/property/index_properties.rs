use proptest::prelude::*;
use verity_core::RecordId;
use verity_index::FlatIndex;

fn vectors(dims: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(
        prop::collection::vec(-1.0f32..1.0, dims)
            .prop_filter("non-zero", |v| v.iter().any(|x| x.abs() > 1e-3)),
        1..40,
    )
}

fn build(vectors: Vec<Vec<f32>>, dims: usize) -> FlatIndex {
    let ids = (0..vectors.len())
        .map(|i| RecordId::new(i as u32 % 3, i as u32))
        .collect();
    FlatIndex::from_vectors("m", "fp", dims, ids, vectors).unwrap()
}

proptest! {
    #[test]
    fn result_len_is_min_of_k_and_size(
        vs in vectors(4),
        query in prop::collection::vec(0.1f32..1.0, 4),
        k in 1usize..60,
    ) {
        let n = vs.len();
        let index = build(vs, 4);
        let hits = index.search(&query, k, None).unwrap();
        prop_assert_eq!(hits.len(), k.min(n));
    }

    #[test]
    fn results_are_ranked(
        vs in vectors(4),
        query in prop::collection::vec(0.1f32..1.0, 4),
        k in 1usize..60,
    ) {
        let index = build(vs, 4);
        let hits = index.search(&query, k, None).unwrap();
        for w in hits.windows(2) {
            prop_assert!(w[0].1 > w[1].1 || (w[0].1 == w[1].1 && w[0].0 < w[1].0));
        }
    }

    #[test]
    fn threshold_only_removes_low_scores(
        vs in vectors(3),
        query in prop::collection::vec(0.1f32..1.0, 3),
        threshold in 0.0f32..1.0,
    ) {
        let index = build(vs, 3);
        let all = index.search(&query, 100, None).unwrap();
        let kept = index.search(&query, 100, Some(threshold)).unwrap();
        prop_assert!(kept.iter().all(|h| h.1 >= threshold));
        let expected: Vec<_> = all.into_iter().filter(|h| h.1 >= threshold).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn search_is_deterministic(
        vs in vectors(5),
        query in prop::collection::vec(-1.0f32..1.0, 5)
            .prop_filter("non-zero", |v| v.iter().any(|x| x.abs() > 1e-3)),
    ) {
        let index = build(vs, 5);
        prop_assert_eq!(
            index.search(&query, 10, None).unwrap(),
            index.search(&query, 10, None).unwrap()
        );
    }
}
