use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Language model and answer generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Chat completions endpoint.
    pub endpoint: String,
    pub model: String,
    /// Never written back out by `to_toml`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Exact answer returned when the citations do not support one.
    pub fallback_text: String,
    /// How the prompt refers to the corpus, e.g. "the Quran".
    pub source_label: String,
}

impl GenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            api_key: None,
            temperature: defaults::DEFAULT_TEMPERATURE,
            max_tokens: defaults::DEFAULT_GENERATION_MAX_TOKENS,
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            fallback_text: defaults::DEFAULT_FALLBACK_TEXT.to_string(),
            source_label: defaults::DEFAULT_SOURCE_LABEL.to_string(),
        }
    }
}
