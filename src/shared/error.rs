//! Shared Error Types
//!
//! This module defines the error taxonomy of the relay. These errors are
//! used by the message log, the relay and both transport adapters.
//!
//! # Error Categories
//!
//! - `ValidationError` - A submission is missing required fields
//! - `StorageFault` - Reading or writing the message log failed
//! - `MalformedPayload` - An in-band frame could not be parsed
//! - `SerializationError` - JSON encoding failed
//!
//! Transport faults are not represented here: a failed socket read or write
//! simply ends that connection and evicts it from the live set.
//!
//! # Usage
//!
//! ```rust
//! use darkchat::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "username is required");
//! assert!(error.is_invalid_submission());
//! ```
use thiserror::Error;

/// Errors produced by the relay core
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Submission failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The message log could not be read or written
    #[error("Storage fault during {operation}: {message}")]
    StorageFault {
        /// `read` or `write`
        operation: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// In-band frame could not be parsed
    #[error("Malformed payload: {message}")]
    MalformedPayload {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a storage fault for a failed read
    pub fn storage_read(message: impl Into<String>) -> Self {
        Self::StorageFault {
            operation: "read",
            message: message.into(),
        }
    }

    /// Create a storage fault for a failed write
    pub fn storage_write(message: impl Into<String>) -> Self {
        Self::StorageFault {
            operation: "write",
            message: message.into(),
        }
    }

    /// Create a new malformed payload error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Whether this error rejects a submission (answered with 400)
    pub fn is_invalid_submission(&self) -> bool {
        matches!(self, Self::ValidationError { .. } | Self::MalformedPayload { .. })
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
