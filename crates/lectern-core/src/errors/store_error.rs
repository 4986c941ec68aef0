/// Vector-store errors: dimension violations, corrupt on-disk state,
/// caller bugs, and persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("dimension mismatch: store holds {expected}-wide vectors, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("corrupt store: {details}")]
    CorruptStore { details: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("persistence failed for {path}: {message}")]
    Persistence { path: String, message: String },
}
