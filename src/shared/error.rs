//! Shared Error Types
//!
//! Errors that can occur on both the client and the server. The client uses
//! them to reject a form before sending it; the server uses them to reject a
//! request body.
//!
//! # Usage
//!
//! ```rust
//! use eduplatform::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "All fields are required");
//! assert_eq!(error.user_message(), "All fields are required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message without the field prefix, suitable for showing to a user
    pub fn user_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
