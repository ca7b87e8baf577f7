//! Backend Module
//!
//! This module contains the credential service: an Axum HTTP server that
//! registers accounts, verifies logins, and issues signed session tokens.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, password hashing, tokens, credential service
//!   and its HTTP handlers
//! - **`middleware`** - Bearer-token authentication
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the [`auth::service::CredentialService`], which owns the
//! account store and the token issuer. Neither carries per-request mutable
//! state: the store is a connection pool (or a lock-guarded list) and the
//! issuer only holds keys. Each request is independent.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse` and maps validation, duplicate and credential failures to
//! 400, token failures to 401, and everything else to 500 with a fixed
//! message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and account management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
pub use auth::service::CredentialService;
