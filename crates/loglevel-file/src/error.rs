//! Error types shared by the logger and the file sink

use thiserror::Error;

/// Errors raised while attaching a file sink or dispatching a log call
#[derive(Error, Debug)]
pub enum LogError {
    /// The logger cannot be extended, or the options are unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Truncating or appending to the target file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The logger has no method with this name
    #[error("Unknown logging method: {0}")]
    UnknownMethod(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    /// Whether the error came from the filesystem
    pub fn is_io(&self) -> bool {
        matches!(self, LogError::Io(_))
    }
}

pub type LogResult<T> = Result<T, LogError>;
