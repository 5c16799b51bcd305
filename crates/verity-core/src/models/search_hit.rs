use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::{Record, RecordId};

/// A matched record with its similarity score and sequential neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub record: Record,
    /// Cosine similarity between the query and the record; higher is better.
    pub similarity_score: f32,
    /// Neighbors from the same collection, ascending by sequence.
    #[serde(default)]
    pub context: Vec<Record>,
}

impl SearchHit {
    pub fn new(record: Record, similarity_score: f32) -> Self {
        Self {
            record,
            similarity_score,
            context: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Vec<Record>) -> Self {
        self.context = context;
        self
    }

    pub fn record_id(&self) -> RecordId {
        self.record.id
    }
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.record.reference())?;
        writeln!(f, "Original: {}", self.record.original_text)?;
        writeln!(f, "Translation: {}", self.record.translation_text)?;
        write!(f, "Score: {:.4}", self.similarity_score)
    }
}
