use super::{
    ConfigError, CorpusError, CorpusInconsistencyError, EncodingError, GenerationError, IndexError,
};

/// Top-level error for the pipeline. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("index error: {0}")]
    Index(#[from] IndexError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("corpus inconsistency: {0}")]
    CorpusInconsistency(#[from] CorpusInconsistencyError),

    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid request: {field}: {reason}")]
    InvalidRequest { field: String, reason: String },
}

/// Convenience alias used across the workspace.
pub type VerityResult<T> = Result<T, VerityError>;

/// Coarse classification of a `VerityError`, stable for callers and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Encoding,
    IndexNotLoaded,
    Generation,
    CorpusInconsistency,
    InvalidRequest,
    Corpus,
    Index,
    Config,
}

impl VerityError {
    pub fn invalid_request(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Encoding(_) => ErrorKind::Encoding,
            Self::Index(IndexError::NotLoaded) => ErrorKind::IndexNotLoaded,
            Self::Index(_) => ErrorKind::Index,
            Self::Generation(_) => ErrorKind::Generation,
            Self::CorpusInconsistency(_) => ErrorKind::CorpusInconsistency,
            Self::Corpus(_) => ErrorKind::Corpus,
            Self::Config(_) => ErrorKind::Config,
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Encoding => "ENCODING_ERROR",
            ErrorKind::IndexNotLoaded => "INDEX_NOT_LOADED",
            ErrorKind::Generation => match self {
                Self::Generation(e) if e.is_timeout() => "GENERATION_TIMEOUT",
                _ => "GENERATION_ERROR",
            },
            ErrorKind::CorpusInconsistency => "CORPUS_INCONSISTENCY",
            ErrorKind::InvalidRequest => "INVALID_REQUEST",
            ErrorKind::Corpus => "CORPUS_ERROR",
            ErrorKind::Index => "INDEX_ERROR",
            ErrorKind::Config => "CONFIG_ERROR",
        }
    }

    /// Structural failures that should alert rather than be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::CorpusInconsistency | ErrorKind::Corpus | ErrorKind::Index
        )
    }
}
