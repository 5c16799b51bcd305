use crate::errors::EncodingError;

/// Text-to-vector encoder.
///
/// The same text must always produce the same vector for a given model.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EncodingError>;

    /// Embed a batch of texts, preserving input order.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EncodingError> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Dimensionality of produced vectors.
    fn dimensions(&self) -> usize;

    /// Model identifier, persisted alongside the index.
    fn name(&self) -> &str;
}
