//! # lectern-core
//!
//! Foundation crate for the lectern retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LecternConfig;
pub use errors::{LecternError, LecternResult};
pub use models::{Candidate, ChunkMetadata, IndexMode, SearchHit, SourceDocument};
