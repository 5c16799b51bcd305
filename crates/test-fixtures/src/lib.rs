//! Shared fixtures for Verity tests: sample corpora, a deterministic topic
//! encoder, and scripted language models.
//!
//! Test-only crate; helpers panic instead of returning errors.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use verity_core::{Record, RecordId};

pub mod encoder;
pub mod models;

pub use encoder::TopicEncoder;
pub use models::{FailingModel, ScriptedModel, SlowModel};

/// Query that lands on the two fasting records of the sample corpus.
pub const FASTING_QUERY: &str = "What does the source say about fasting?";

/// Query sharing no topic with any sample record.
pub const NONSENSE_QUERY: &str = "zxqv blorf quantum giraffe spreadsheet";

/// Root directory of the bundled corpora.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("corpora")
}

/// Absolute path to a bundled fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Path of the nested sample corpus: three collections, nine records.
pub fn sample_corpus_path() -> PathBuf {
    fixture_path("sample_corpus.json")
}

/// Path of a flat corpus holding exactly one record.
pub fn single_record_corpus_path() -> PathBuf {
    fixture_path("single_record.json")
}

/// Records of the single-record corpus.
pub fn single_record() -> Vec<Record> {
    load_fixture("single_record.json")
}

/// Synthetic records: one collection per entry of `sizes`, numbered from 1,
/// each with sequences `1..=size`.
pub fn synthetic_records(sizes: &[u32]) -> Vec<Record> {
    sizes
        .iter()
        .enumerate()
        .flat_map(|(i, &size)| {
            let collection = i as u32 + 1;
            (1..=size).map(move |sequence| {
                Record::new(
                    RecordId::new(collection, sequence),
                    format!("Collection {collection}"),
                    format!("original {collection} {sequence}"),
                    format!("translation {collection} {sequence}"),
                )
            })
        })
        .collect()
}
