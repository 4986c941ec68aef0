//! Error taxonomy for the lectern workspace.
//!
//! Each subsystem gets its own enum; `LecternError` is the umbrella the
//! public APIs return. No error is retried anywhere in the core — callers
//! needing resilience wrap calls externally.

mod config_error;
mod pipeline_error;
mod store_error;

pub use config_error::ConfigError;
pub use pipeline_error::PipelineError;
pub use store_error::StoreError;

/// Umbrella error for all lectern operations.
#[derive(Debug, thiserror::Error)]
pub enum LecternError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type LecternResult<T> = Result<T, LecternError>;

/// Shorthand for an upstream collaborator failure at a named stage.
pub fn upstream_err(stage: &str, reason: impl std::fmt::Display) -> LecternError {
    PipelineError::UpstreamModel {
        stage: stage.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
