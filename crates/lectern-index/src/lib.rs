//! # lectern-index
//!
//! Offline indexing pipeline. One run walks
//! `LOADED → CLEANED → CHUNKED → {ABSTRACTED | PASSTHROUGH} → EMBEDDED → INDEXED`,
//! producing one indexed chunk per `"{source_id}_chunk{i}"` and appending
//! the batch to the vector store.

mod cache;
mod engine;
mod preprocess;

pub use cache::AbstractCache;
pub use engine::IndexingEngine;
pub use preprocess::SentencePreprocessor;
