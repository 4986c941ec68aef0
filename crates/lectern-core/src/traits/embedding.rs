use crate::errors::LecternResult;

/// Embedding model collaborator.
///
/// A deterministic function of its inputs: the same text always yields
/// the same vector, and every vector in a batch has the same width.
/// Callers wanting cosine similarity must L2-normalize before insertion —
/// the store scores raw inner products.
pub trait IEmbedder: Send + Sync {
    /// Embed a batch of texts, one fixed-width vector per text, same order.
    fn embed_batch(&self, texts: &[String]) -> LecternResult<Vec<Vec<f32>>>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
