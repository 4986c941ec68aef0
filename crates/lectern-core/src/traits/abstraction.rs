use crate::errors::LecternResult;

/// Summarization model collaborator: one shorter text per chunk.
pub trait IAbstractor: Send + Sync {
    /// Summarize a batch of chunks, one abstract per chunk, same order.
    fn abstract_batch(&self, chunks: &[String]) -> LecternResult<Vec<String>>;
}
