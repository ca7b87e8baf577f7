//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler.
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Error Categories
//!
//! | Variant              | Status | Message sent to client          |
//! |----------------------|--------|---------------------------------|
//! | `ValidationError`    | 400    | the validation message          |
//! | `ConflictError`      | 400    | the conflict message            |
//! | `InvalidCredentials` | 400    | `Invalid credentials`           |
//! | `Unauthorized`       | 401    | the reason                      |
//! | anything else        | 500    | `Internal Server Error`         |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE, INVALID_CREDENTIALS};
