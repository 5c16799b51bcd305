use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable composite identifier of a corpus record.
///
/// Ordering is by collection, then by sequence within the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId {
    pub collection: u32,
    pub sequence: u32,
}

impl RecordId {
    pub fn new(collection: u32, sequence: u32) -> Self {
        Self {
            collection,
            sequence,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.collection, self.sequence)
    }
}

/// One corpus entry. Immutable once the corpus is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub id: RecordId,
    pub collection_name: String,
    pub original_text: String,
    pub translation_text: String,
}

impl Record {
    pub fn new(
        id: RecordId,
        collection_name: impl Into<String>,
        original_text: impl Into<String>,
        translation_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            collection_name: collection_name.into(),
            original_text: original_text.into(),
            translation_text: translation_text.into(),
        }
    }

    /// Human-readable reference, e.g. `Genesis 1, 3`.
    pub fn reference(&self) -> String {
        format!(
            "{} {}, {}",
            self.collection_name, self.id.collection, self.id.sequence
        )
    }
}
