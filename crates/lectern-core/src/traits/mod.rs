//! Collaborator traits consumed by the pipelines.
//!
//! The ML collaborators (embedder, abstractor, rerank scorer) are
//! injected at construction — there is no process-wide model singleton.

mod abstraction;
mod embedding;
mod expansion;
mod preprocess;
mod rerank;

pub use abstraction::IAbstractor;
pub use embedding::IEmbedder;
pub use expansion::IQueryExpander;
pub use preprocess::IPreprocessor;
pub use rerank::IRerankScorer;
