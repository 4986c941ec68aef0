//! Configuration: serde structs with defaults, loadable from TOML.

mod defaults;
mod indexing_config;
mod retrieval_config;

pub use defaults::*;
pub use indexing_config::IndexingConfig;
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, LecternResult};

/// Top-level configuration for both pipelines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    pub retrieval: RetrievalConfig,
    pub indexing: IndexingConfig,
}

impl LecternConfig {
    /// Load configuration from a TOML file. Missing sections and fields
    /// fall back to defaults.
    pub fn load(path: &Path) -> LecternResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::Invalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(config)
    }
}
