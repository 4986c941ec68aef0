/// Pipeline errors raised while indexing or retrieving.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("upstream model failure at {stage}: {reason}")]
    UpstreamModel { stage: String, reason: String },

    #[error("abstraction cache error at {path}: {message}")]
    Cache { path: String, message: String },
}
