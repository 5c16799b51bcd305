//! Error handling for Verity.
//! One error enum per subsystem, `thiserror` only, aggregated by `VerityError`.

pub mod config_error;
pub mod corpus_error;
pub mod encoding_error;
pub mod generation_error;
pub mod index_error;
pub mod inconsistency_error;
pub mod verity_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use encoding_error::EncodingError;
pub use generation_error::GenerationError;
pub use index_error::IndexError;
pub use inconsistency_error::CorpusInconsistencyError;
pub use verity_error::{ErrorKind, VerityError, VerityResult};
