use serde::Serialize;

use crate::errors::GenerationError;

/// A chat-style prompt: fixed instructions plus the per-query user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Text-generation backend used by the grounded answer generator.
///
/// Implementations perform exactly one upstream call per `complete`.
#[allow(async_fn_in_trait)]
pub trait ILanguageModel: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerationError>;

    fn name(&self) -> &str;
}

impl<T: ILanguageModel> ILanguageModel for std::sync::Arc<T> {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        (**self).complete(prompt).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
