use crate::errors::LecternResult;

/// Cross-encoder scoring collaborator.
///
/// Scores are computed independently per document: a document scores
/// identically whether scored alone or inside a batch. That independence
/// is what lets an implementation degrade from batched to per-item
/// scoring without changing results.
pub trait IRerankScorer: Send + Sync {
    /// Score `query` against each document, one scalar logit per document,
    /// same order. Higher means more relevant.
    fn score(&self, query: &str, docs: &[String]) -> LecternResult<Vec<f32>>;
}
