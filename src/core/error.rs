//! Error types for SVM configuration handling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The solver boundary refused the assembled parameter record.
    /// Carries the same message text the reference solver prints.
    #[error("Configuration rejected: {0}")]
    ConfigRejected(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
