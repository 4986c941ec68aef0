//! Data model shared across the workspace.

mod candidate;
mod document;
mod metadata;
mod report;

pub use candidate::{Candidate, SearchHit};
pub use document::SourceDocument;
pub use metadata::ChunkMetadata;
pub use report::{IndexMode, IndexReport, IndexingStage};
