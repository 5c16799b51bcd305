use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding encoder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Encoder backend: "onnx" or "hashed".
    pub provider: String,
    /// Path to the ONNX model file.
    pub model_path: Option<String>,
    /// Path to the `tokenizer.json` matching the model.
    pub tokenizer_path: Option<String>,
    /// Model identifier, persisted with the index.
    pub model_name: String,
    pub dimensions: usize,
    /// Inputs longer than this many tokens are truncated.
    pub max_tokens: usize,
    pub batch_size: usize,
    /// Max entries in the in-memory query embedding cache. 0 disables it.
    pub query_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model_path: None,
            tokenizer_path: None,
            model_name: defaults::DEFAULT_MODEL_NAME.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
