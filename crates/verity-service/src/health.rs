use serde::Serialize;

/// Whether the service can answer queries yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ready,
    /// The vector index has not been installed.
    NotReady,
}

/// Point-in-time view of the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub records: usize,
    /// Number of vectors in the index, 0 until it is ready.
    pub indexed: usize,
    pub dimensions: usize,
    pub encoder: String,
    pub version: &'static str,
}
