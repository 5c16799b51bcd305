/// Corpus loading errors. All of them are raised before any query is served.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus source unreadable: {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("corpus source malformed: {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("duplicate record id {record_id} in corpus")]
    DuplicateRecord { record_id: String },

    #[error("corpus contains no records")]
    Empty,

    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },
}
