pub mod answer;
pub mod citation_bundle;
pub mod query_request;
pub mod query_result;
pub mod record;
pub mod search_hit;

pub use answer::GeneratedAnswer;
pub use citation_bundle::CitationBundle;
pub use query_request::QueryRequest;
pub use query_result::QueryResult;
pub use record::{Record, RecordId};
pub use search_hit::SearchHit;
