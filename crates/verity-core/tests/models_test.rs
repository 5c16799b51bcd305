use std::time::Duration;

use verity_core::config::RetrievalConfig;
use verity_core::models::{CitationBundle, GeneratedAnswer, QueryRequest, QueryResult};
use verity_core::{ErrorKind, Record, RecordId, SearchHit};

fn record(collection: u32, sequence: u32) -> Record {
    Record::new(
        RecordId::new(collection, sequence),
        "Al-Baqarah",
        "original",
        "translation",
    )
}

#[test]
fn record_ids_order_by_collection_then_sequence() {
    let mut ids = vec![
        RecordId::new(2, 1),
        RecordId::new(1, 7),
        RecordId::new(2, 0),
        RecordId::new(1, 2),
    ];
    ids.sort();
    assert_eq!(
        ids,
        vec![
            RecordId::new(1, 2),
            RecordId::new(1, 7),
            RecordId::new(2, 0),
            RecordId::new(2, 1),
        ]
    );
    assert_eq!(RecordId::new(2, 183).to_string(), "2:183");
}

#[test]
fn record_serializes_flat() {
    let json = serde_json::to_value(record(2, 183)).unwrap();
    assert_eq!(json["collection"], 2);
    assert_eq!(json["sequence"], 183);
    assert_eq!(json["collection_name"], "Al-Baqarah");
}

#[test]
fn search_hit_display_formats_citation() {
    let hit = SearchHit::new(record(2, 183), 0.87654);
    let text = hit.to_string();
    assert!(text.starts_with("Al-Baqarah 2, 183\n"));
    assert!(text.contains("Translation: translation"));
    assert!(text.ends_with("Score: 0.8765"));
}

#[test]
fn bundle_sufficiency_tracks_emptiness() {
    assert!(!CitationBundle::empty().sufficient());
    let bundle = CitationBundle::from_ranked(vec![SearchHit::new(record(1, 1), 0.2)]);
    assert!(bundle.sufficient());
    assert_eq!(bundle.len(), 1);
}

#[test]
fn request_defaults() {
    let req = QueryRequest::new("What about fasting?");
    assert_eq!(req.k, 5);
    assert_eq!(req.window, 1);
    assert_eq!(req.score_threshold, None);
    assert!(req.validate().is_ok());
}

#[test]
fn request_from_config_uses_retrieval_defaults() {
    let config = RetrievalConfig {
        default_k: 8,
        default_window: 2,
        default_score_threshold: Some(0.4),
        ..Default::default()
    };
    let req = QueryRequest::from_config("What about fasting?", &config);
    assert_eq!(req.query, "What about fasting?");
    assert_eq!(req.k, 8);
    assert_eq!(req.window, 2);
    assert_eq!(req.score_threshold, Some(0.4));
    assert_eq!(req.timeout, None);
}

#[test]
fn request_validation() {
    let bad_k = QueryRequest::new("q").with_k(0);
    assert_eq!(bad_k.validate().unwrap_err().kind(), ErrorKind::InvalidRequest);

    let large_k = QueryRequest::new("q").with_k(101);
    assert!(large_k.validate().is_ok());

    let bad_threshold = QueryRequest::new("q").with_score_threshold(1.01);
    assert!(bad_threshold.validate().is_err());

    let nan = QueryRequest::new("q").with_score_threshold(f32::NAN);
    assert!(nan.validate().is_err());

    let zero_timeout = QueryRequest::new("q").with_timeout(Duration::ZERO);
    assert!(zero_timeout.validate().is_err());

    let edges = QueryRequest::new("q").with_score_threshold(1.0).with_window(0);
    assert!(edges.validate().is_ok());
}

#[test]
fn query_result_serializes_processing_time_as_seconds() {
    let result = QueryResult {
        query_id: uuid::Uuid::nil(),
        query: "q".into(),
        answer: "a".into(),
        citations: vec![],
        has_answer: false,
        processing_time: Duration::from_millis(1500),
        answered_at: chrono::Utc::now(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["processing_time"], 1.5);

    let back: QueryResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.processing_time, Duration::from_millis(1500));
}

#[test]
fn fallback_answer_never_invokes_model() {
    let answer = GeneratedAnswer::fallback("nothing here");
    assert!(!answer.has_answer);
    assert!(!answer.model_invoked);
    assert_eq!(answer.text, "nothing here");
}
