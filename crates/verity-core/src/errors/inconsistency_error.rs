/// Build-time skew between the vector index and the corpus store.
///
/// Always fatal: it means index positions no longer map to the records they
/// were built from.
#[derive(Debug, thiserror::Error)]
pub enum CorpusInconsistencyError {
    #[error("record {record_id} returned by the index is missing from the corpus")]
    MissingRecord { record_id: String },

    #[error("corpus fingerprint {corpus} does not match index fingerprint {index}")]
    FingerprintMismatch { index: String, corpus: String },

    #[error("index holds {index} vectors but corpus holds {corpus} records")]
    CountMismatch { index: usize, corpus: usize },
}
