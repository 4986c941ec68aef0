use serde::{Deserialize, Serialize};

use super::defaults;

/// Online retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Candidates fetched per expansion vector (wider than the final
    /// result count).
    pub search_top_k: usize,
    /// Final result count when the caller does not specify one.
    pub rerank_top_k: usize,
    /// Default mode: precision rerank vs. similarity-only.
    pub use_rerank: bool,
    /// RRF smoothing constant for multi-expansion fusion.
    pub rrf_k: u32,
    /// Max entries in the query-embedding cache.
    pub query_cache_size: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            search_top_k: defaults::DEFAULT_SEARCH_TOP_K,
            rerank_top_k: defaults::DEFAULT_RERANK_TOP_K,
            use_rerank: defaults::DEFAULT_USE_RERANK,
            rrf_k: defaults::DEFAULT_RRF_K,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
