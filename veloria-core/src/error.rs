//! Error types for the veloria stores.

use thiserror::Error;

/// Errors that can occur in veloria operations.
///
/// Malformed stored data is never reported here: the stores drop what they
/// cannot decode and carry on.
#[derive(Error, Debug)]
pub enum VeloriaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Avatar must be an image data URL")]
    InvalidAvatar,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for VeloriaError {
    fn from(e: serde_json::Error) -> Self {
        VeloriaError::Serialization(e.to_string())
    }
}

/// Result type alias for veloria operations.
pub type VeloriaResult<T> = Result<T, VeloriaError>;
