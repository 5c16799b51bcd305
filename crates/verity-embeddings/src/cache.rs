//! In-memory query embedding cache using moka.

use std::time::Duration;

use moka::sync::Cache;

/// Query embedding cache keyed by blake3 hash of the input text.
///
/// Only queries go through it; corpus entries are embedded once at build time.
pub struct QueryCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = QueryCache::new(10);
        let key = QueryCache::key("fasting");
        cache.insert(key.clone(), vec![1.0, 0.0]);
        assert_eq!(cache.get(&key), Some(vec![1.0, 0.0]));
        assert_eq!(cache.get(&QueryCache::key("prayer")), None);
    }

    #[test]
    fn keys_are_stable() {
        assert_eq!(QueryCache::key("a b"), QueryCache::key("a b"));
        assert_ne!(QueryCache::key("a b"), QueryCache::key("a  b"));
    }

    #[test]
    fn clear_drops_entries() {
        let cache = QueryCache::new(10);
        cache.insert("k".to_string(), vec![1.0]);
        cache.clear();
        assert_eq!(cache.get("k"), None);
    }
}
