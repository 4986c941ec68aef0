use serde::{Deserialize, Serialize};

/// Metadata attached to one indexed chunk.
///
/// Required fields replace the untyped mapping of ad-hoc stores: `id`,
/// the chunk's source text, and its abstract. Anything else a caller
/// wants to carry rides in the flattened extension map and is persisted
/// and returned verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Stable identifier, `"{source_id}_chunk{i}"` for pipeline-produced
    /// chunks. Not enforced unique by the store.
    pub id: String,
    /// Original chunk text.
    pub text: String,
    /// Abstract/summary text. In passthrough mode this equals `text`.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Open extension map for caller-defined fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChunkMetadata {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        abstract_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            abstract_text: abstract_text.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// The text a ranking model should see for this chunk: the abstract
    /// when present, the raw chunk text otherwise. Indexing-time and
    /// query-time selection both go through here so comparisons stay
    /// consistent.
    pub fn ranking_text(&self) -> &str {
        if self.abstract_text.is_empty() {
            &self.text
        } else {
            &self.abstract_text
        }
    }
}
