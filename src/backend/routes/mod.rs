//! Route Configuration Module
//!
//! This module configures all HTTP routes for the credential service.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS and tracing layers
//! └── api_routes.rs   - Authentication endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /` - Service status
//! - `POST /api/auth/register` - Account registration
//! - `POST /api/auth/login` - Account login
//! - `GET /api/auth/me` - Current account
//!
//! Everything else falls through to a 404 JSON body.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
