use std::sync::{Arc, Mutex, OnceLock};

use tracing::info;
use verity_core::errors::{IndexError, VerityError, VerityResult};

use crate::flat::FlatIndex;

/// Write-once slot holding the live index.
///
/// Empty until a build or load completes; queries against an empty slot
/// fail with `IndexError::NotLoaded`. Once filled it never changes, so no
/// partially built index is ever visible.
#[derive(Debug, Default)]
pub struct SharedIndex {
    slot: OnceLock<Arc<FlatIndex>>,
    build_guard: Mutex<()>,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that is already ready.
    pub fn ready(index: FlatIndex) -> Self {
        let shared = Self::new();
        // Fresh slot, cannot already be set.
        let _ = shared.slot.set(Arc::new(index));
        shared
    }

    /// Publish a finished index.
    pub fn install(&self, index: FlatIndex) -> Result<(), IndexError> {
        let (records, dims) = (index.len(), index.dimensions());
        self.slot
            .set(Arc::new(index))
            .map_err(|_| IndexError::AlreadyLoaded)?;
        info!(records, dims, "vector index ready");
        Ok(())
    }

    /// Run `build` and publish its result, one builder at a time.
    ///
    /// A second caller waits for the first and then gets `AlreadyLoaded`.
    pub fn install_with<F>(&self, build: F) -> VerityResult<()>
    where
        F: FnOnce() -> VerityResult<FlatIndex>,
    {
        let _guard = self
            .build_guard
            .lock()
            .map_err(|_| VerityError::Index(IndexError::Format {
                path: "<build>".to_string(),
                reason: "a previous index build panicked".to_string(),
            }))?;
        if self.is_ready() {
            return Err(IndexError::AlreadyLoaded.into());
        }
        let index = build()?;
        self.install(index)?;
        Ok(())
    }

    pub fn get(&self) -> Result<Arc<FlatIndex>, IndexError> {
        self.slot.get().cloned().ok_or(IndexError::NotLoaded)
    }

    pub fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }
}
