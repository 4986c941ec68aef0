//! RetrievalEngine: orchestrates the per-query pipeline.
//!
//! Two modes: fast similarity-only ordering, and precision reranking via
//! the cross-encoder adapter. A reranker failure is fatal — the engine
//! never silently downgrades to similarity ordering.

use tracing::{debug, info};

use lectern_core::config::RetrievalConfig;
use lectern_core::errors::{upstream_err, LecternResult, StoreError};
use lectern_core::models::Candidate;
use lectern_core::traits::{IEmbedder, IQueryExpander, IRerankScorer};
use lectern_store::VectorStore;

use crate::assembler;
use crate::fusion;
use crate::query_cache::QueryEmbeddingCache;
use crate::reranker::Reranker;

/// The online retrieval engine. Reads the store, never mutates it.
pub struct RetrievalEngine<'a> {
    store: &'a VectorStore,
    embedder: &'a dyn IEmbedder,
    expander: &'a dyn IQueryExpander,
    reranker: Reranker<'a>,
    cache: QueryEmbeddingCache,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        store: &'a VectorStore,
        embedder: &'a dyn IEmbedder,
        expander: &'a dyn IQueryExpander,
        scorer: &'a dyn IRerankScorer,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            expander,
            reranker: Reranker::new(scorer),
            cache: QueryEmbeddingCache::new(config.query_cache_size),
            config,
        }
    }

    /// Retrieve with the configured defaults for result count and mode.
    pub fn retrieve_default(&self, query: &str) -> LecternResult<Vec<Candidate>> {
        self.retrieve(query, None, self.config.use_rerank)
    }

    /// Run the full per-query pipeline. `top_k` defaults to the
    /// configured rerank top-k when not given.
    pub fn retrieve(
        &self,
        query: &str,
        top_k: Option<usize>,
        use_rerank: bool,
    ) -> LecternResult<Vec<Candidate>> {
        let final_top_k = top_k.unwrap_or(self.config.rerank_top_k);
        if final_top_k == 0 {
            return Err(StoreError::InvalidArgument {
                reason: "top_k must be positive".to_string(),
            }
            .into());
        }

        // Step 1: Expand. An empty expansion short-circuits — no
        // embedding, no search.
        let expansions = self
            .expander
            .expand(query)
            .map_err(|e| upstream_err("query expansion", e))?;
        if expansions.is_empty() {
            debug!("query expanded to nothing, returning empty result");
            return Ok(Vec::new());
        }

        // Step 2: Embed all expansions in one batch, through the cache.
        let vectors = self.embed_expansions(&expansions)?;

        // Step 3: Search at full breadth for every expansion vector.
        let raw = self.store.search(&vectors, self.config.search_top_k)?;
        let per_expansion = assembler::assemble(raw);

        // Step 4: Fuse the per-expansion lists into one ranking. For a
        // single expansion the fused order is exactly the similarity
        // order.
        let candidates = fusion::fuse(&per_expansion, self.config.rrf_k);
        debug!(
            expansions = expansions.len(),
            candidates = candidates.len(),
            "search and fusion complete"
        );

        // Step 5: Rank. Reranking scores against the ORIGINAL raw query,
        // not an expansion.
        let results = if use_rerank {
            self.reranker.rerank(query, candidates, final_top_k)?
        } else {
            let mut results = candidates;
            results.truncate(final_top_k);
            results
        };

        let mode = if use_rerank { "rerank" } else { "similarity" };
        info!(
            results = results.len(),
            top_k = final_top_k,
            mode,
            "retrieval complete"
        );
        Ok(results)
    }

    /// Embed expansion strings, serving repeats from the cache. Misses
    /// are embedded together in a single batch call, then cached.
    fn embed_expansions(&self, expansions: &[String]) -> LecternResult<Vec<Vec<f32>>> {
        let mut vectors: Vec<Option<Vec<f32>>> =
            expansions.iter().map(|q| self.cache.get(q)).collect();

        let misses: Vec<usize> = vectors
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.is_none().then_some(i))
            .collect();
        if !misses.is_empty() {
            let texts: Vec<String> = misses.iter().map(|&i| expansions[i].clone()).collect();
            let embedded = self
                .embedder
                .embed_batch(&texts)
                .map_err(|e| upstream_err("query embedding", e))?;
            if embedded.len() != texts.len() {
                return Err(upstream_err(
                    "query embedding",
                    format!(
                        "embedder returned {} vectors for {} queries",
                        embedded.len(),
                        texts.len()
                    ),
                ));
            }
            for (&i, vector) in misses.iter().zip(embedded) {
                self.cache.put(&expansions[i], vector.clone());
                vectors[i] = Some(vector);
            }
        }

        vectors
            .into_iter()
            .map(|v| v.ok_or_else(|| upstream_err("query embedding", "missing vector")))
            .collect()
    }
}
