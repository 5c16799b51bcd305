//! The `answer_query` entry point.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;
use verity_core::config::{RetrievalConfig, VerityConfig};
use verity_core::constants::VERSION;
use verity_core::errors::{EncodingError, VerityResult};
use verity_core::traits::{IEmbeddingProvider, ILanguageModel};
use verity_core::{QueryRequest, QueryResult};
use verity_corpus::CorpusStore;
use verity_generation::GroundedGenerator;
use verity_index::SharedIndex;
use verity_retrieval::Retriever;

use crate::cache::ResultCache;
use crate::health::{HealthReport, HealthStatus};
use crate::stage::QueryStage;

/// Answers questions strictly from the corpus.
///
/// Holds only read-only shared state after construction, so one instance
/// serves any number of concurrent callers.
pub struct QueryService<L: ILanguageModel> {
    retriever: Retriever,
    encoder: Arc<dyn IEmbeddingProvider>,
    generator: GroundedGenerator<L>,
    cache: Option<ResultCache>,
    retrieval: RetrievalConfig,
}

impl<L: ILanguageModel> QueryService<L> {
    /// `index` may still be empty; queries fail with `IndexNotLoaded` until it is installed.
    pub fn new(
        corpus: Arc<CorpusStore>,
        index: Arc<SharedIndex>,
        encoder: Arc<dyn IEmbeddingProvider>,
        model: L,
        config: &VerityConfig,
    ) -> Self {
        Self {
            retriever: Retriever::new(corpus, index),
            encoder,
            generator: GroundedGenerator::new(model, &config.generation),
            cache: ResultCache::from_config(&config.cache),
            retrieval: config.retrieval.clone(),
        }
    }

    /// A request for `query` carrying the configured `k`, window and threshold.
    pub fn request(&self, query: impl Into<String>) -> QueryRequest {
        QueryRequest::from_config(query, &self.retrieval)
    }

    /// Replace the configured result cache, or disable it with `None`.
    pub fn with_cache(mut self, cache: Option<ResultCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Run the full pipeline for one question.
    ///
    /// # Errors
    /// - `InvalidRequest` for out-of-range parameters
    /// - `Encoding` for blank or unencodable questions
    /// - `IndexNotLoaded` before the index is installed
    /// - `CorpusInconsistency` when the index references unknown records
    /// - `Generation` when the language model fails or times out
    ///
    /// An empty or insufficient citation set is not an error: it yields the
    /// fallback answer with `has_answer = false`.
    pub async fn answer_query(&self, request: QueryRequest) -> VerityResult<QueryResult> {
        let started = Instant::now();
        let query_id = Uuid::new_v4();
        let span = info_span!(
            "answer_query",
            %query_id,
            k = request.k,
            window = request.window,
            score_threshold = ?request.score_threshold,
        );
        self.run(query_id, started, request).instrument(span).await
    }

    /// Like [`answer_query`](Self::answer_query), but serves repeated
    /// questions from the result cache. Failures are never cached.
    pub async fn answer_query_cached(&self, request: QueryRequest) -> VerityResult<QueryResult> {
        let Some(cache) = &self.cache else {
            return self.answer_query(request).await;
        };
        if let Some(hit) = cache.get(&request) {
            debug!(query_id = %hit.query_id, "result cache hit");
            return Ok(hit);
        }
        let result = self.answer_query(request.clone()).await?;
        cache.insert(&request, result.clone());
        Ok(result)
    }

    async fn run(
        &self,
        query_id: Uuid,
        started: Instant,
        request: QueryRequest,
    ) -> VerityResult<QueryResult> {
        request.validate()?;
        let k = request.k.min(self.retrieval.max_k);
        if k < request.k {
            debug!(requested = request.k, k, "k clamped to retrieval.max_k");
        }

        transition(QueryStage::Embedding);
        let vector = self.encode(&request.query).await?;

        transition(QueryStage::Searching);
        let raw = self.retriever.search(&vector, k, request.score_threshold)?;

        transition(QueryStage::Expanding);
        let hits = self.retriever.expand(&raw, request.window)?;

        transition(QueryStage::Assembling);
        let bundle = self.retriever.assemble(hits);

        transition(if bundle.sufficient() {
            QueryStage::Generating
        } else {
            QueryStage::Fallback
        });
        let answer = self
            .generator
            .generate(&request.query, &bundle, request.timeout)
            .await?;

        transition(QueryStage::Done);
        let processing_time = started.elapsed();
        info!(
            citations = bundle.len(),
            has_answer = answer.has_answer,
            model_invoked = answer.model_invoked,
            elapsed_ms = processing_time.as_millis() as u64,
            "query answered"
        );

        Ok(QueryResult {
            query_id,
            query: request.query,
            answer: answer.text,
            citations: bundle.into_hits(),
            has_answer: answer.has_answer,
            processing_time,
            answered_at: Utc::now(),
        })
    }

    /// Encoding is CPU-bound, so it runs on the blocking pool.
    async fn encode(&self, query: &str) -> VerityResult<Vec<f32>> {
        if query.trim().is_empty() {
            return Err(EncodingError::EmptyInput.into());
        }
        let encoder = Arc::clone(&self.encoder);
        let text = query.to_string();
        let vector = tokio::task::spawn_blocking(move || encoder.embed(&text))
            .await
            .map_err(|e| EncodingError::InferenceFailed {
                reason: format!("encoder task failed: {e}"),
            })??;
        Ok(vector)
    }

    pub fn health(&self) -> HealthReport {
        let index = self.retriever.index().get().ok();
        HealthReport {
            status: if index.is_some() {
                HealthStatus::Ready
            } else {
                HealthStatus::NotReady
            },
            records: self.retriever.corpus().len(),
            indexed: index.as_ref().map_or(0, |i| i.len()),
            dimensions: self.encoder.dimensions(),
            encoder: self.encoder.name().to_string(),
            version: VERSION,
        }
    }

    pub fn retriever(&self) -> &Retriever {
        &self.retriever
    }

    pub fn generator(&self) -> &GroundedGenerator<L> {
        &self.generator
    }

    pub fn cache(&self) -> Option<&ResultCache> {
        self.cache.as_ref()
    }
}

fn transition(stage: QueryStage) {
    debug!(%stage, "stage transition");
}
