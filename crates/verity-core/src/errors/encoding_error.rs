/// Embedding encoder errors. The encoder never substitutes a zero vector.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("input is not valid UTF-8: {reason}")]
    InvalidUtf8 { reason: String },

    #[error("input produced no tokens: {preview:?}")]
    NoTokens { preview: String },

    #[error("model load failed: {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("encoder produced a zero-norm vector")]
    DegenerateVector,
}
