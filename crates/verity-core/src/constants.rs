/// Verity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Answer returned verbatim when the citation bundle cannot support an answer.
pub const FALLBACK_ANSWER: &str = "The source does not explicitly address this question.";

/// Format version written into persisted vector index files.
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// Magic bytes at the start of a persisted vector index file.
pub const INDEX_MAGIC: &[u8; 8] = b"VRTYIDX1";
