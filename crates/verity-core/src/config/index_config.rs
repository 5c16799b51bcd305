use serde::{Deserialize, Serialize};

use super::defaults;

/// Vector index configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Where the persisted index lives.
    pub index_path: String,
    /// Searches over at least this many vectors are scored in parallel.
    pub parallel_threshold: usize,
    /// Rebuild instead of failing when the persisted index no longer matches the corpus.
    pub rebuild_on_mismatch: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_path: defaults::DEFAULT_INDEX_PATH.to_string(),
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
            rebuild_on_mismatch: defaults::DEFAULT_REBUILD_ON_MISMATCH,
        }
    }
}
