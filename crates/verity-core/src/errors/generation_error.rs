/// Language-model call failures. Never converted into the fallback answer.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("language model call timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("language model transport error: {reason}")]
    Transport { reason: String },

    #[error("language model returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("language model rate limited (retry after {retry_after_secs:?} s)")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("malformed language model response: {reason}")]
    MalformedResponse { reason: String },

    #[error("language model returned an empty completion")]
    EmptyResponse,

    #[error("language model not configured: {reason}")]
    NotConfigured { reason: String },
}

impl GenerationError {
    /// Whether this failure is the timeout subtype.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
