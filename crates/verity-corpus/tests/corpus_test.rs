use std::sync::Arc;

use verity_core::errors::CorpusError;
use verity_core::RecordId;
use verity_corpus::{searchable_text, ContextExpander, CorpusStore, JsonCorpusSource};

#[test]
fn loads_sample_corpus_in_document_order() {
    let source = JsonCorpusSource::new(test_fixtures::sample_corpus_path());
    let store = CorpusStore::load(&source).unwrap();

    assert_eq!(store.len(), 9);
    assert_eq!(store.collection_count(), 3);
    assert_eq!(store.records()[0].id, RecordId::new(1, 1));
    assert_eq!(store.records()[3].id, RecordId::new(2, 1));

    let fast = store.get(RecordId::new(2, 2)).unwrap();
    assert_eq!(fast.collection_name, "The Fast");
    assert!(searchable_text(fast).starts_with("The Fast 2, 2: Fasting lasts"));
}

#[test]
fn flat_corpus_matches_its_records() {
    let source = JsonCorpusSource::new(test_fixtures::single_record_corpus_path());
    let loaded = CorpusStore::load(&source).unwrap();
    let direct = CorpusStore::from_records(test_fixtures::single_record()).unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.records(), direct.records());
    assert_eq!(loaded.fingerprint(), direct.fingerprint());

    let expander = ContextExpander::new(Arc::new(direct));
    assert!(expander.expand(RecordId::new(1, 1), 3).unwrap().is_empty());
}

#[test]
fn reloading_gives_the_same_fingerprint() {
    let source = JsonCorpusSource::new(test_fixtures::sample_corpus_path());
    let a = CorpusStore::load(&source).unwrap();
    let b = CorpusStore::load(&source).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().len(), 64);
}

#[test]
fn duplicate_ids_in_file_fail_to_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dup.json");
    std::fs::write(
        &path,
        r#"{"collections": [{"number": 1, "name": "X", "records": [
            {"sequence": 1, "original_text": "a", "translation_text": "a"},
            {"sequence": 1, "original_text": "b", "translation_text": "b"}
        ]}]}"#,
    )
    .unwrap();

    let err = CorpusStore::load(&JsonCorpusSource::new(&path)).unwrap_err();
    assert!(matches!(err, CorpusError::DuplicateRecord { .. }));
}

#[test]
fn two_record_collection_neighbors_each_other() {
    let source = JsonCorpusSource::new(test_fixtures::sample_corpus_path());
    let expander = ContextExpander::new(Arc::new(CorpusStore::load(&source).unwrap()));

    let first = expander.expand(RecordId::new(2, 1), 1).unwrap();
    let second = expander.expand(RecordId::new(2, 2), 1).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].id, RecordId::new(2, 2));
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, RecordId::new(2, 1));
}
