//! EduPlatform - Main Library
//!
//! EduPlatform is a student learning-management front end backed by a small
//! credential service. The part of the system with real contracts is the
//! authentication flow: registration and login on the server, and the
//! session gate that decides which pages the desktop client may show.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - Account roles, user summaries, request/response bodies
//!   - Validation and configuration errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server exposing `/api/auth/register`, `/api/auth/login`
//!     and `/api/auth/me`
//!   - bcrypt password hashing and JWT issuance
//!   - Account storage (PostgreSQL or in-memory)
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - Session gate holding the signed-in user
//!   - Route table and route guards
//!   - Login/signup forms and placeholder course pages
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (enabled by default). Pulls in axum, sqlx,
//!   bcrypt and jsonwebtoken.
//!
//! # Usage
//!
//! ```rust,no_run
//! use eduplatform::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for input validation used on both sides
//! - `backend::BackendError` for HTTP handlers, converted into JSON responses
//! - `egui_app::ClientError` for transport failures and server rejections

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
