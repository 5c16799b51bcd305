//! Compiled defaults for every configuration section.

use crate::constants::FALLBACK_ANSWER;

// Corpus
pub const DEFAULT_CORPUS_PATH: &str = "data/corpus.json";

// Embedding
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "onnx";
pub const DEFAULT_MODEL_NAME: &str = "all-MiniLM-L6-v2";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_MAX_TOKENS: usize = 256;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 64;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 10_000;

// Index
pub const DEFAULT_INDEX_PATH: &str = "data/index.vrty";
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;
pub const DEFAULT_REBUILD_ON_MISMATCH: bool = false;

// Retrieval
pub const DEFAULT_K: usize = 5;
pub const DEFAULT_WINDOW: usize = 1;
pub const DEFAULT_MAX_K: usize = 100;

// Generation
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_GENERATION_MAX_TOKENS: u32 = 500;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FALLBACK_TEXT: &str = FALLBACK_ANSWER;
pub const DEFAULT_SOURCE_LABEL: &str = "the source";

// Result cache
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1_000;

// Observability
pub const DEFAULT_LOG_FILTER: &str = "verity=info";
pub const DEFAULT_JSON_LOGS: bool = false;
