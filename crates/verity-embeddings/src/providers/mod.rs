//! Provider registry.
//!
//! Exactly one provider encodes both the corpus and every query, so there is
//! no fallback: a provider that cannot be created is a startup failure.

pub mod hashed_tfidf;
pub mod onnx_provider;

pub use hashed_tfidf::HashedTfIdfProvider;
pub use onnx_provider::OnnxProvider;

use tracing::info;
use verity_core::config::EmbeddingConfig;
use verity_core::errors::EncodingError;
use verity_core::traits::IEmbeddingProvider;

/// Create the configured provider.
pub fn create_provider(
    config: &EmbeddingConfig,
) -> Result<Box<dyn IEmbeddingProvider>, EncodingError> {
    match config.provider.as_str() {
        "onnx" => {
            let model_path =
                config
                    .model_path
                    .as_deref()
                    .ok_or_else(|| EncodingError::ModelLoadFailed {
                        path: "<unset>".to_string(),
                        reason: "embedding.model_path is required for the onnx provider"
                            .to_string(),
                    })?;
            let tokenizer_path = config.tokenizer_path.as_deref().ok_or_else(|| {
                EncodingError::ModelLoadFailed {
                    path: "<unset>".to_string(),
                    reason: "embedding.tokenizer_path is required for the onnx provider"
                        .to_string(),
                }
            })?;
            let provider = OnnxProvider::load(
                model_path,
                tokenizer_path,
                &config.model_name,
                config.dimensions,
                config.max_tokens,
            )?;
            info!(provider = "onnx", model = %config.model_name, "embedding provider loaded");
            Ok(Box::new(provider))
        }
        "hashed" => {
            info!(provider = "hashed", dims = config.dimensions, "using hashed TF-IDF provider");
            Ok(Box::new(HashedTfIdfProvider::new(config.dimensions)))
        }
        other => Err(EncodingError::ModelLoadFailed {
            path: other.to_string(),
            reason: "unknown embedding provider".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_provider_is_created() {
        let config = EmbeddingConfig {
            provider: "hashed".to_string(),
            dimensions: 64,
            ..Default::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.dimensions(), 64);
    }

    #[test]
    fn onnx_without_model_path_fails() {
        let config = EmbeddingConfig::default();
        assert!(matches!(
            create_provider(&config),
            Err(EncodingError::ModelLoadFailed { .. })
        ));
    }

    #[test]
    fn unknown_provider_fails_instead_of_falling_back() {
        let config = EmbeddingConfig {
            provider: "ollama".to_string(),
            ..Default::default()
        };
        assert!(create_provider(&config).is_err());
    }
}
