//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and body extraction
//! ├── register.rs - Account registration handler
//! ├── login.rs    - Account login handler
//! └── me.rs       - Get current account handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - Account registration
//! - **`login`** - POST /api/auth/login - Account login
//! - **`get_me`** - GET /api/auth/me - Current account info
//!
//! # Example
//!
//! ```rust,no_run
//! use eduplatform::backend::auth::handlers::{get_me, login, register};
//! use eduplatform::backend::server::state::AppState;
//! use axum::{routing::get, routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/auth/register", post(register))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/auth/me", get(get_me));
//! ```

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::backend::error::BackendError;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current account handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;

/// Unwrap a JSON body, turning axum's rejection into a 400 with our body shape
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, BackendError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            Err(BackendError::validation(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )))
        }
    }
}
