//! Error types for the Ask Me Anything client.
//!
//! One enum covers every failure category in the workspace. Backend
//! failures of any kind (network, status, body) collapse into
//! [`AppError::Request`], which is the only error the form ever shows.

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (terminal, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend request failed: network error, non-2xx status or bad body
    #[error("{0}")]
    Request(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid interaction with the form (unknown command, bad index)
    #[error("{0}")]
    Ui(String),
}

impl AppError {
    /// Whether this error came from talking to the backend.
    pub fn is_request(&self) -> bool {
        matches!(self, AppError::Request(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_bare_message() {
        let err = AppError::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.is_request());
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
        assert!(!err.is_request());
    }
}
