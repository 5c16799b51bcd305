//! EmbeddingEngine, the entry point for verity-embeddings.
//!
//! Wraps the single configured provider with input validation, dimension
//! checks, L2 normalization and a query cache. Implements
//! `IEmbeddingProvider`.

use tracing::{debug, info};
use verity_core::config::EmbeddingConfig;
use verity_core::errors::EncodingError;
use verity_core::traits::IEmbeddingProvider;

use crate::cache::QueryCache;
use crate::normalize;
use crate::providers;

/// Shared, immutable encoder. Build once at startup and pass by reference.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: Option<QueryCache>,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Build the configured provider and wrap it.
    ///
    /// # Errors
    /// Any provider load failure; there is no fallback provider.
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, EncodingError> {
        let provider = providers::create_provider(config)?;
        Self::new(provider, config.query_cache_size)
    }

    /// Wrap an existing provider. `cache_size == 0` disables the query cache.
    pub fn new(
        provider: Box<dyn IEmbeddingProvider>,
        cache_size: u64,
    ) -> Result<Self, EncodingError> {
        let dimensions = provider.dimensions();
        if dimensions == 0 {
            return Err(EncodingError::ModelLoadFailed {
                path: provider.name().to_string(),
                reason: "provider reports zero dimensions".to_string(),
            });
        }
        let cache = (cache_size > 0).then(|| QueryCache::new(cache_size));

        info!(
            provider = provider.name(),
            dims = dimensions,
            cache_size,
            "EmbeddingEngine initialized"
        );

        Ok(Self {
            provider,
            cache,
            dimensions,
        })
    }

    /// Encode a query, consulting the cache first.
    ///
    /// The result is always unit length with the engine's dimensions.
    pub fn encode(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        if text.trim().is_empty() {
            return Err(EncodingError::EmptyInput);
        }

        let key = self.cache.as_ref().map(|_| QueryCache::key(text));
        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Some(hit) = cache.get(key) {
                debug!("query embedding cache hit");
                return Ok(hit);
            }
        }

        let embedding = self.finish(self.provider.embed(text)?)?;

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.insert(key, embedding.clone());
        }
        Ok(embedding)
    }

    /// Encode raw bytes, rejecting anything that is not UTF-8.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<Vec<f32>, EncodingError> {
        let text = std::str::from_utf8(bytes).map_err(|e| EncodingError::InvalidUtf8 {
            reason: e.to_string(),
        })?;
        self.encode(text)
    }

    /// Encode corpus texts, bypassing the cache. Order is preserved.
    pub fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EncodingError> {
        if texts.iter().any(|t| t.trim().is_empty()) {
            return Err(EncodingError::EmptyInput);
        }
        self.provider
            .embed_batch(texts)?
            .into_iter()
            .map(|v| self.finish(v))
            .collect()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    fn finish(&self, mut embedding: Vec<f32>) -> Result<Vec<f32>, EncodingError> {
        normalize::validate_dimensions(&embedding, self.dimensions)?;
        if !normalize::l2_normalize(&mut embedding) {
            return Err(EncodingError::DegenerateVector);
        }
        Ok(embedding)
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        self.encode(text)
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EncodingError> {
        self.encode_batch(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        self.provider.name()
    }
}
