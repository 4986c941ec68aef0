//! # lectern-retrieval
//!
//! Online retrieval pipeline. Per query:
//! `RAW_QUERY → EXPANDED → EMBEDDED → SEARCHED → FUSED →
//! {RANKED_BY_SIMILARITY | RERANKED} → RESULT`.

pub mod assembler;
pub mod fusion;

mod engine;
mod expansion;
mod query_cache;
mod reranker;

pub use engine::RetrievalEngine;
pub use expansion::TrimExpander;
pub use query_cache::QueryEmbeddingCache;
pub use reranker::Reranker;
