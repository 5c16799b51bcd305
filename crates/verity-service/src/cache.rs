//! Whole-result cache for repeated questions.

use std::time::Duration;

use moka::sync::Cache;
use verity_core::config::CacheConfig;
use verity_core::{QueryRequest, QueryResult};

/// Successful query results keyed by question and retrieval parameters.
///
/// Only successes go in. A hit is returned verbatim, including the original
/// `query_id` and `processing_time`.
pub struct ResultCache {
    cache: Cache<String, QueryResult>,
}

impl ResultCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// `None` when caching is disabled.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        config
            .enabled
            .then(|| Self::new(config.max_entries, Duration::from_secs(config.ttl_secs)))
    }

    /// blake3 over the whitespace-normalized question plus `k`, threshold and window.
    pub fn key(request: &QueryRequest) -> String {
        let normalized = request.query.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut hasher = blake3::Hasher::new();
        hasher.update(normalized.as_bytes());
        hasher.update(&[0]);
        hasher.update(&(request.k as u64).to_le_bytes());
        match request.score_threshold {
            Some(threshold) => {
                hasher.update(&[1]);
                hasher.update(&threshold.to_bits().to_le_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
        hasher.update(&(request.window as u64).to_le_bytes());
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, request: &QueryRequest) -> Option<QueryResult> {
        self.cache.get(&Self::key(request))
    }

    pub fn insert(&self, request: &QueryRequest, result: QueryResult) {
        self.cache.insert(Self::key(request), result);
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}
