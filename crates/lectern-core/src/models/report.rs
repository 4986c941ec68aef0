use serde::{Deserialize, Serialize};

/// Indexing mode: run the abstraction model, or pass chunk text through
/// as its own abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMode {
    Summarize,
    NoSummarize,
}

/// Stages of one indexing run, in order. Failures are attributed to the
/// stage that raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexingStage {
    Loaded,
    Cleaned,
    Chunked,
    Abstracted,
    Passthrough,
    Embedded,
    Indexed,
}

impl IndexingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loaded => "load",
            Self::Cleaned => "clean",
            Self::Chunked => "chunk",
            Self::Abstracted => "abstract",
            Self::Passthrough => "passthrough",
            Self::Embedded => "embed",
            Self::Indexed => "index",
        }
    }
}

impl std::fmt::Display for IndexingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one completed indexing run.
#[derive(Debug, Clone, Serialize)]
pub struct IndexReport {
    pub documents: usize,
    pub chunks: usize,
    pub mode: IndexMode,
    /// Whether cached abstracts were reused instead of re-running the
    /// abstraction model.
    pub reused_cached_abstracts: bool,
}
