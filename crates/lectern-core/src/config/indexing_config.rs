use serde::{Deserialize, Serialize};

use super::defaults;

/// Offline indexing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexingConfig {
    /// Character budget per chunk.
    pub chunk_max_tokens: usize,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_max_tokens: defaults::DEFAULT_CHUNK_MAX_TOKENS,
        }
    }
}
