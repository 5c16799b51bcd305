//! JSON corpus source.
//!
//! Two shapes are accepted: a nested document grouping records under their
//! collection, or a flat array of records.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use verity_core::errors::CorpusError;
use verity_core::traits::ICorpusSource;
use verity_core::{Record, RecordId};

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusDocument {
    Nested { collections: Vec<CollectionDoc> },
    Flat(Vec<Record>),
}

#[derive(Deserialize)]
struct CollectionDoc {
    number: u32,
    name: String,
    records: Vec<RecordDoc>,
}

#[derive(Deserialize)]
struct RecordDoc {
    sequence: u32,
    original_text: String,
    translation_text: String,
}

/// Reads records from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCorpusSource {
    path: PathBuf,
}

impl JsonCorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ICorpusSource for JsonCorpusSource {
    fn load(&self) -> Result<Vec<Record>, CorpusError> {
        let origin = self.path.display().to_string();
        let text = std::fs::read_to_string(&self.path).map_err(|e| CorpusError::Io {
            path: origin.clone(),
            reason: e.to_string(),
        })?;
        parse_corpus_json(&text, &origin)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

/// Parse a corpus document, flattening collections in document order.
pub fn parse_corpus_json(text: &str, origin: &str) -> Result<Vec<Record>, CorpusError> {
    let doc: CorpusDocument = serde_json::from_str(text).map_err(|e| CorpusError::Parse {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;

    let records = match doc {
        CorpusDocument::Flat(records) => records,
        CorpusDocument::Nested { collections } => collections
            .into_iter()
            .flat_map(|collection| {
                let CollectionDoc {
                    number,
                    name,
                    records,
                } = collection;
                records.into_iter().map(move |r| Record {
                    id: RecordId::new(number, r.sequence),
                    collection_name: name.clone(),
                    original_text: r.original_text,
                    translation_text: r.translation_text,
                })
            })
            .collect(),
    };
    Ok(records)
}
