use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::RetrievalConfig;
use crate::errors::{VerityError, VerityResult};

/// Parameters for a single `answer_query` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRequest {
    pub query: String,
    /// Maximum number of primary hits.
    pub k: usize,
    /// Minimum similarity a hit must reach, in `[0, 1]`. `None` disables filtering.
    pub score_threshold: Option<f32>,
    /// Neighbors taken on each side of a hit, same collection only.
    pub window: usize,
    /// Per-request generation timeout; falls back to the configured one.
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            k: crate::config::defaults::DEFAULT_K,
            score_threshold: None,
            window: crate::config::defaults::DEFAULT_WINDOW,
            timeout: None,
        }
    }
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// A request carrying the configured retrieval defaults.
    pub fn from_config(query: impl Into<String>, config: &RetrievalConfig) -> Self {
        Self {
            query: query.into(),
            k: config.default_k,
            score_threshold: config.default_score_threshold,
            window: config.default_window,
            timeout: None,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = Some(threshold);
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reject parameters that cannot produce a meaningful search.
    /// Query text is checked by the encoder, not here. Any `k >= 1` is
    /// valid; a `k` above the corpus size returns every record.
    pub fn validate(&self) -> VerityResult<()> {
        if self.k == 0 {
            return Err(VerityError::invalid_request("k", "must be at least 1"));
        }
        if let Some(threshold) = self.score_threshold {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                return Err(VerityError::invalid_request(
                    "score_threshold",
                    format!("{threshold} is outside [0, 1]"),
                ));
            }
        }
        if matches!(self.timeout, Some(t) if t.is_zero()) {
            return Err(VerityError::invalid_request("timeout", "must be non-zero"));
        }
        Ok(())
    }
}
