//! Authentication Module
//!
//! This module handles account registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`accounts`** - Account model
//! - **`store`** - `AccountStore` trait with PostgreSQL and in-memory backends
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT claims, issuing and verification
//! - **`service`** - `CredentialService`: the register/login rules
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Account model
//! ├── store/          - Account storage backends
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Credential service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports, body extraction
//!     ├── register.rs - POST /api/auth/register
//!     ├── login.rs    - POST /api/auth/login
//!     └── me.rs       - GET /api/auth/me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: user name, email and password → uniqueness check → bcrypt
//!    hash → account stored with role `student` → token returned
//! 2. **Login**: email and password → account lookup → bcrypt compare → token
//!    returned
//! 3. **Me**: bearer token → signature/expiry check → account loaded
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never leave the server
//! - Tokens are stateless HS256 JWTs; the server keeps no session table
//! - Unknown email and wrong password produce the same 400 response

/// Account model
pub mod accounts;

/// Account storage backends
pub mod store;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Registration and login rules
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use accounts::{Account, NewAccount};
pub use handlers::{get_me, login, register};
pub use service::{CredentialService, IssuedSession};
pub use sessions::{Claims, TokenIssuer};
pub use store::{AccountStore, MemoryAccountStore, PgAccountStore, StoreError};
