/**
 * Backend Error Types
 *
 * This module defines error types specific to the relay server. These
 * errors are returned from HTTP handlers and from server start-up.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors carry an explicit status code, e.g. unknown routes.
 *
 * ## Shared Errors
 *
 * Errors from the relay core. Rejected submissions (validation failures
 * and unparseable bodies) map to `400 Bad Request`; everything else is a
 * server fault.
 *
 * ## Start-up Errors
 *
 * Configuration errors and I/O errors while binding the listener.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{ConfigError, SharedError};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use darkchat::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Not Found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Error from the relay core
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// Listener or server I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Whether the error rejects the caller's submission
    pub fn is_invalid_submission(&self) -> bool {
        matches!(self, Self::SharedError(err) if err.is_invalid_submission())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 for rejected submissions, otherwise 500
    /// - `ConfigError` / `IoError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) if self.is_invalid_submission() => StatusCode::BAD_REQUEST,
            Self::SharedError(_) | Self::ConfigError(_) | Self::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message returned to clients
    ///
    /// Rejected submissions are reported as `invalid`; the detail stays in
    /// the server log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            _ if self.is_invalid_submission() => "invalid".to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}
