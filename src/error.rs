use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Search server URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
