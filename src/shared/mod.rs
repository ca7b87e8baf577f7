//! Shared Module
//!
//! This module contains types that are shared between the desktop client and
//! the credential service. Everything here is platform-agnostic and designed
//! to be serialized over HTTP.

/// Accounts, roles and authentication wire types
pub mod account;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use account::{
    AuthResponse, ErrorBody, LoginRequest, RegisterRequest, Role, UserSummary, MISSING_FIELDS,
};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
