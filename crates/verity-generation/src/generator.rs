//! Grounded answer generation.
//!
//! An insufficient bundle short-circuits to the fallback text without any
//! model call. Otherwise the model gets exactly one bounded call and its
//! output is checked for a refusal. Model failures are returned as errors,
//! never turned into the fallback.

use std::time::Duration;

use tracing::{debug, info, warn};
use verity_core::config::GenerationConfig;
use verity_core::errors::GenerationError;
use verity_core::models::GeneratedAnswer;
use verity_core::traits::ILanguageModel;
use verity_core::CitationBundle;

use crate::prompt::PromptBuilder;
use crate::refusal::{is_refusal, strip_markdown};

pub struct GroundedGenerator<L: ILanguageModel> {
    model: L,
    prompts: PromptBuilder,
    default_timeout: Duration,
}

impl<L: ILanguageModel> GroundedGenerator<L> {
    pub fn new(model: L, config: &GenerationConfig) -> Self {
        Self {
            model,
            prompts: PromptBuilder::from_config(config),
            default_timeout: config.timeout(),
        }
    }

    pub fn model(&self) -> &L {
        &self.model
    }

    pub fn fallback_text(&self) -> &str {
        self.prompts.fallback_text()
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Answer `query` from `bundle`, bounding the model call by `timeout`
    /// (or the configured default).
    pub async fn generate(
        &self,
        query: &str,
        bundle: &CitationBundle,
        timeout: Option<Duration>,
    ) -> Result<GeneratedAnswer, GenerationError> {
        if !bundle.sufficient() {
            debug!("bundle insufficient, returning fallback without model call");
            return Ok(GeneratedAnswer::fallback(self.fallback_text()));
        }

        let prompt = self.prompts.build(query, bundle);
        let timeout = timeout.unwrap_or(self.default_timeout);

        let raw = tokio::time::timeout(timeout, self.model.complete(&prompt))
            .await
            .map_err(|_| {
                warn!(model = self.model.name(), timeout_ms = timeout.as_millis() as u64, "language model timed out");
                GenerationError::Timeout {
                    after_ms: timeout.as_millis() as u64,
                }
            })??;

        let text = strip_markdown(raw.trim()).trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        let has_answer = !is_refusal(&text, self.fallback_text());
        info!(
            model = self.model.name(),
            citations = bundle.len(),
            has_answer,
            "grounded answer generated"
        );
        Ok(GeneratedAnswer {
            text,
            has_answer,
            model_invoked: true,
        })
    }
}
