//! Error types for the paste playground
//!
//! Provides unified error handling using thiserror.

use axum::http::StatusCode;
use thiserror::Error;

// == App Error Enum ==
/// Unified error type for request handling.
///
/// The paste cache itself never fails; these cover the collaborators around it.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Language the runner cannot execute
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Upstream unreachable or answered with a failure status
    #[error("Error fetching from upstream: {0}")]
    Upstream(String),

    /// Upstream answered with a body we could not parse
    #[error("Error parsing upstream response: {0}")]
    Decode(String),

    /// Code could not be prepared or the interpreter could not be started
    #[error("Execution failed: {0}")]
    Execution(String),

    /// Template failed to compile or render
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::UnsupportedLanguage(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Upstream(_) | AppError::Decode(_) => StatusCode::BAD_GATEWAY,
            AppError::Execution(_) | AppError::Template(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the paste playground.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedLanguage("cobol".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream("down".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Decode("bad json".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Execution("no python".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
