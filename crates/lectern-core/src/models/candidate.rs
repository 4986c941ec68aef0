use serde::Serialize;

use super::metadata::ChunkMetadata;

/// One raw search result from the vector store.
///
/// `index` is the insertion position of the matched vector; it breaks
/// score ties and identifies the same item across candidate lists.
/// The metadata is an owned copy — mutating a hit never touches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub score: f32,
    pub index: usize,
    pub metadata: ChunkMetadata,
}

/// A search hit with its similarity score merged into the record, as
/// produced by the candidate assembler and returned from retrieval.
///
/// Serializes flat: `id`, `text`, `abstract`, any extension fields,
/// `score`, and `rerank_score` once a reranking pass has attached one.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    #[serde(flatten)]
    pub metadata: ChunkMetadata,
    /// Inner-product similarity from the store.
    pub score: f32,
    /// Cross-encoder relevance logit, present only after reranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank_score: Option<f32>,
    /// Insertion position in the store, for tie-breaks and fusion identity.
    #[serde(skip)]
    pub store_index: usize,
}

impl From<SearchHit> for Candidate {
    fn from(hit: SearchHit) -> Self {
        Self {
            metadata: hit.metadata,
            score: hit.score,
            rerank_score: None,
            store_index: hit.index,
        }
    }
}
