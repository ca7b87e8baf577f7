/**
 * Backend Error Types
 *
 * This module defines the error type used by the credential service and its
 * HTTP handlers.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * Caused by the request itself and reported back verbatim:
 * - Missing or empty fields, malformed JSON body
 * - Email or user name already taken
 * - Wrong email/password combination
 * - Missing, malformed or expired bearer token
 *
 * ## Unexpected Errors
 *
 * Store failures, hashing failures, token signing failures and blocking task
 * failures. They are logged in full and reported to the client as a fixed
 * message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::store::StoreError;
use crate::shared::SharedError;

/// Message returned for both "no such email" and "wrong password"
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Message returned for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use eduplatform::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::conflict("Username or Email already exists");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing input or malformed request body
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    /// Duplicate identity (email or user name)
    #[error("Conflict: {message}")]
    ConflictError { message: String },

    /// Unknown email or password mismatch
    ///
    /// Both cases share this variant so the response cannot tell them apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or unusable bearer token
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Shared error (request validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Account store failure
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    /// bcrypt failure
    #[error("Password hashing error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    /// JWT signing failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled
    #[error("Task error: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictError {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// Duplicates and bad credentials are 400, matching validation failures.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::ConflictError { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::StoreError(_)
            | Self::HashError(_)
            | Self::TokenError(_)
            | Self::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is the server's fault
    pub fn is_unexpected(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the message that is safe to send to the client
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            Self::ConflictError { message } => message.clone(),
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            Self::Unauthorized { message } => message.clone(),
            Self::SharedError(err) => err.user_message().to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::conflict("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);

        let store_error: BackendError = StoreError::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(store_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(store_error.is_unexpected());
    }

    #[test]
    fn test_unexpected_errors_hide_details() {
        let error: BackendError = StoreError::Corrupt("account 10.0.0.3 has role 'janitor'".to_string()).into();
        assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
        assert!(error.to_string().contains("10.0.0.3"));
    }

    #[test]
    fn test_from_shared_error() {
        let shared_error = SharedError::validation("email", "All fields are required");
        let backend_error: BackendError = shared_error.into();

        assert_eq!(backend_error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(backend_error.message(), "All fields are required");
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(BackendError::InvalidCredentials.message(), INVALID_CREDENTIALS);
    }
}
