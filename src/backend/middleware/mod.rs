//! Middleware Module
//!
//! HTTP middleware for the credential service.
//!
//! - **`auth`** - Bearer-token authentication for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use eduplatform::backend::auth::{get_me, CredentialService};
//! use eduplatform::backend::middleware::auth_middleware;
//!
//! fn protected(service: CredentialService) -> Router<CredentialService> {
//!     Router::new()
//!         .route("/api/auth/me", get(get_me))
//!         .route_layer(middleware::from_fn_with_state(service, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
