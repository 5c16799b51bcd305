use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::search_hit::SearchHit;

/// Final output of `answer_query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query_id: Uuid,
    pub query: String,
    pub answer: String,
    /// Always the assembled citations, even when the model refused.
    pub citations: Vec<SearchHit>,
    pub has_answer: bool,
    #[serde(with = "duration_secs")]
    pub processing_time: Duration,
    pub answered_at: DateTime<Utc>,
}

impl QueryResult {
    pub fn citation_count(&self) -> usize {
        self.citations.len()
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
