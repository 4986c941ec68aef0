/// Lectern system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved metadata key holding the similarity score on result records.
pub const SCORE_FIELD: &str = "score";

/// Reserved metadata key holding the cross-encoder score after reranking.
pub const RERANK_SCORE_FIELD: &str = "rerank_score";
