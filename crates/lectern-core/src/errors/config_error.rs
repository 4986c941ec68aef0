/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file unreadable at {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("config file invalid at {path}: {message}")]
    Invalid { path: String, message: String },
}
