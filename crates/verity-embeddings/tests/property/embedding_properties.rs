use proptest::prelude::*;
use verity_core::traits::IEmbeddingProvider;
use verity_embeddings::normalize::l2_norm;
use verity_embeddings::providers::HashedTfIdfProvider;
use verity_embeddings::EmbeddingEngine;

fn engine() -> EmbeddingEngine {
    EmbeddingEngine::new(Box::new(HashedTfIdfProvider::new(64)), 0).unwrap()
}

proptest! {
    #[test]
    fn encoding_is_deterministic(s in "[a-z]{2,8}( [a-z]{2,8}){0,10}") {
        let engine = engine();
        prop_assert_eq!(engine.encode(&s).unwrap(), engine.encode(&s).unwrap());
    }

    #[test]
    fn successful_encodings_are_unit_length(s in "\\PC{0,80}") {
        if let Ok(v) = engine().encode(&s) {
            prop_assert_eq!(v.len(), 64);
            prop_assert!((l2_norm(&v) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn topic_encoder_through_engine_is_unit_length(s in "[a-z ]{1,60}") {
        let engine = EmbeddingEngine::new(Box::new(test_fixtures::TopicEncoder::new()), 0).unwrap();
        match engine.encode(&s) {
            Ok(v) => {
                prop_assert_eq!(v.len(), engine.dimensions());
                prop_assert!((l2_norm(&v) - 1.0).abs() < 1e-4);
            }
            Err(_) => prop_assert!(s.trim().is_empty()),
        }
    }
}
