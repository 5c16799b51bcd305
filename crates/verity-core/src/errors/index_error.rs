/// Vector index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("vector index is not loaded")]
    NotLoaded,

    #[error("vector index is already loaded")]
    AlreadyLoaded,

    #[error("dimension mismatch: index has {expected}, query has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("query vector has zero norm")]
    ZeroNormQuery,

    #[error("vector for record {record_id} has zero norm")]
    DegenerateVector { record_id: String },

    #[error("index was built with model {expected}, encoder is {actual}")]
    ModelMismatch { expected: String, actual: String },

    #[error("index I/O error: {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("index file malformed: {path}: {reason}")]
    Format { path: String, reason: String },
}
