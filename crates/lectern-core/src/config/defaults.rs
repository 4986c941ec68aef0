//! Default configuration values.

/// Similarity-search breadth: candidates fetched per query vector before
/// any reranking.
pub const DEFAULT_SEARCH_TOP_K: usize = 50;

/// Final result count when the caller does not ask for one.
pub const DEFAULT_RERANK_TOP_K: usize = 10;

/// Whether retrieval runs the precision rerank pass by default.
pub const DEFAULT_USE_RERANK: bool = false;

/// RRF smoothing constant. Higher values reduce the influence of
/// top-ranked items from any single expansion's list.
pub const DEFAULT_RRF_K: u32 = 60;

/// Max entries in the query-embedding cache.
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1024;

/// Character budget per chunk for sentence-accumulating chunking.
pub const DEFAULT_CHUNK_MAX_TOKENS: usize = 1000;
