use crate::errors::CorpusError;
use crate::models::Record;

/// Where corpus records come from.
pub trait ICorpusSource {
    /// Load every record, in source order.
    fn load(&self) -> Result<Vec<Record>, CorpusError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}
