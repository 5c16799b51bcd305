use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the JSON corpus file.
    pub source_path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            source_path: defaults::DEFAULT_CORPUS_PATH.to_string(),
        }
    }
}
