use serde::{Deserialize, Serialize};

/// One loaded document, as handed over by a document source.
///
/// Acquisition (file/PDF loading, text extraction) happens outside the
/// core; the pipelines only see id + text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub id: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
