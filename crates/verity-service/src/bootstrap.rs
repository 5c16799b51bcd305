//! Startup wiring: corpus, encoder, index.
//!
//! The persisted index is loaded when present and checked against the live
//! corpus and encoder. A missing file means build and save. A stale file is
//! fatal unless `index.rebuild_on_mismatch` is set.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use verity_core::config::{IndexConfig, VerityConfig};
use verity_core::errors::{CorpusInconsistencyError, IndexError, VerityError, VerityResult};
use verity_core::traits::{IEmbeddingProvider, ILanguageModel};
use verity_corpus::{CorpusStore, JsonCorpusSource};
use verity_embeddings::EmbeddingEngine;
use verity_index::{persist, FlatIndex, IndexBuilder, SharedIndex};

use crate::service::QueryService;

/// Build a ready service from `config`, using the configured encoder.
pub fn bootstrap<L: ILanguageModel>(config: &VerityConfig, model: L) -> VerityResult<QueryService<L>> {
    let encoder = EmbeddingEngine::from_config(&config.embedding)?;
    bootstrap_with(config, Arc::new(encoder), model)
}

/// Build a ready service from `config` around an already constructed encoder.
pub fn bootstrap_with<L: ILanguageModel>(
    config: &VerityConfig,
    encoder: Arc<dyn IEmbeddingProvider>,
    model: L,
) -> VerityResult<QueryService<L>> {
    let source = JsonCorpusSource::new(&config.corpus.source_path);
    let corpus = Arc::new(CorpusStore::load(&source)?);

    let index = load_or_build_index(
        &corpus,
        encoder.as_ref(),
        &config.index,
        config.embedding.batch_size,
    )?;

    Ok(QueryService::new(
        corpus,
        Arc::new(SharedIndex::ready(index)),
        encoder,
        model,
        config,
    ))
}

/// Load the persisted index for `corpus`, or build and persist a fresh one.
pub fn load_or_build_index(
    corpus: &CorpusStore,
    encoder: &dyn IEmbeddingProvider,
    config: &IndexConfig,
    batch_size: usize,
) -> VerityResult<FlatIndex> {
    let path = Path::new(&config.index_path);

    if path.exists() {
        let loaded = persist::load(path)?;
        match check_against(&loaded, corpus, encoder) {
            Ok(()) => {
                info!(path = %path.display(), records = loaded.len(), "persisted index loaded");
                return Ok(loaded.with_parallel_threshold(config.parallel_threshold));
            }
            Err(e) if config.rebuild_on_mismatch && is_stale(&e) => {
                warn!(path = %path.display(), error = %e, "persisted index is stale, rebuilding");
            }
            Err(e) => return Err(e),
        }
    } else {
        info!(path = %path.display(), "no persisted index, building");
    }

    let index = IndexBuilder::new(encoder)
        .batch_size(batch_size)
        .parallel_threshold(config.parallel_threshold)
        .build(corpus)?;
    persist::save(&index, path)?;
    Ok(index)
}

/// The index must come from this encoder and this exact corpus.
fn check_against(
    index: &FlatIndex,
    corpus: &CorpusStore,
    encoder: &dyn IEmbeddingProvider,
) -> VerityResult<()> {
    index.verify(encoder.name(), corpus.fingerprint(), corpus.len())?;
    if index.dimensions() != encoder.dimensions() {
        return Err(IndexError::DimensionMismatch {
            expected: index.dimensions(),
            actual: encoder.dimensions(),
        }
        .into());
    }
    if let Some(missing) = index.ids().iter().find(|id| !corpus.contains(**id)) {
        return Err(CorpusInconsistencyError::MissingRecord {
            record_id: missing.to_string(),
        }
        .into());
    }
    Ok(())
}

fn is_stale(error: &VerityError) -> bool {
    matches!(
        error,
        VerityError::CorpusInconsistency(_)
            | VerityError::Index(IndexError::ModelMismatch { .. })
            | VerityError::Index(IndexError::DimensionMismatch { .. })
    )
}
