use serde::{Deserialize, Serialize};

use super::defaults;

/// Request defaults used by `QueryRequest::from_config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub default_k: usize,
    pub default_window: usize,
    pub default_score_threshold: Option<f32>,
    /// Requests asking for more hits are searched with this `k`.
    pub max_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_k: defaults::DEFAULT_K,
            default_window: defaults::DEFAULT_WINDOW,
            default_score_threshold: None,
            max_k: defaults::DEFAULT_MAX_K,
        }
    }
}
