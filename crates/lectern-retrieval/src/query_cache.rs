//! In-process query-embedding cache backed by moka.
//!
//! Keys are blake3 hashes of the expansion text, so repeated queries skip
//! the embedding model entirely.

use moka::sync::Cache;

/// Bounded cache of expansion text → embedding vector.
pub struct QueryEmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryEmbeddingCache {
    /// Create a cache holding at most `max_entries` embeddings.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&key(text))
    }

    pub fn put(&self, text: &str, embedding: Vec<f32>) {
        self.cache.insert(key(text), embedding);
    }
}

fn key(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
