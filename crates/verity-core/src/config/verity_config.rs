//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CacheConfig, CorpusConfig, EmbeddingConfig, GenerationConfig, IndexConfig,
    ObservabilityConfig, RetrievalConfig,
};
use crate::errors::ConfigError;

/// Name of the project config file looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "verity.toml";

const KNOWN_PROVIDERS: &[&str] = &["onnx", "hashed"];

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VERITY_*`, plus `OPENAI_API_KEY`)
/// 2. Project config (`verity.toml` in the root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VerityConfig {
    pub corpus: CorpusConfig,
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl VerityConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file. Missing keys take their defaults, unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML. The API key is never written.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !KNOWN_PROVIDERS.contains(&self.embedding.provider.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "embedding.provider".to_string(),
                message: format!(
                    "unknown provider '{}', expected one of {KNOWN_PROVIDERS:?}",
                    self.embedding.provider
                ),
            });
        }
        positive("embedding.dimensions", self.embedding.dimensions)?;
        positive("embedding.max_tokens", self.embedding.max_tokens)?;
        positive("embedding.batch_size", self.embedding.batch_size)?;
        positive("retrieval.default_k", self.retrieval.default_k)?;
        positive("retrieval.max_k", self.retrieval.max_k)?;
        if self.retrieval.default_k > self.retrieval.max_k {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.default_k".to_string(),
                message: "must not exceed retrieval.max_k".to_string(),
            });
        }
        if let Some(threshold) = self.retrieval.default_score_threshold {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "retrieval.default_score_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::ValidationFailed {
                field: "generation.temperature".to_string(),
                message: "must be between 0.0 and 2.0".to_string(),
            });
        }
        if self.generation.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "generation.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.generation.fallback_text.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "generation.fallback_text".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.cache.enabled && self.cache.ttl_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.ttl_secs".to_string(),
                message: "must be greater than 0 when the cache is enabled".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `VERITY_<SECTION>_<FIELD>`, e.g. `VERITY_INDEX_PATH`.
    /// Unparseable values are ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("VERITY_CORPUS_PATH") {
            self.corpus.source_path = val;
        }
        if let Ok(val) = std::env::var("VERITY_EMBEDDING_PROVIDER") {
            self.embedding.provider = val;
        }
        if let Ok(val) = std::env::var("VERITY_EMBEDDING_MODEL_PATH") {
            self.embedding.model_path = Some(val);
        }
        if let Ok(val) = std::env::var("VERITY_EMBEDDING_TOKENIZER_PATH") {
            self.embedding.tokenizer_path = Some(val);
        }
        if let Ok(val) = std::env::var("VERITY_INDEX_PATH") {
            self.index.index_path = val;
        }
        if let Ok(val) = std::env::var("VERITY_RETRIEVAL_MAX_K") {
            if let Ok(v) = val.parse::<usize>() {
                self.retrieval.max_k = v;
            }
        }
        if let Ok(val) = std::env::var("VERITY_GENERATION_ENDPOINT") {
            self.generation.endpoint = val;
        }
        if let Ok(val) = std::env::var("VERITY_GENERATION_MODEL") {
            self.generation.model = val;
        }
        if let Ok(val) = std::env::var("VERITY_GENERATION_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.generation.timeout_secs = v;
            }
        }
        if let Some(key) = std::env::var("VERITY_GENERATION_API_KEY")
            .ok()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        {
            self.generation.api_key = Some(key);
        }
        if let Ok(val) = std::env::var("VERITY_CACHE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                self.cache.enabled = v;
            }
        }
        if let Ok(val) = std::env::var("VERITY_CACHE_TTL_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.cache.ttl_secs = v;
            }
        }
        if let Ok(val) = std::env::var("VERITY_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json_logs = v;
            }
        }
    }
}

fn positive(field: &str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}
