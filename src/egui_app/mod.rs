//! egui Native Desktop App Module
//!
//! The EduPlatform desktop client: login and signup against the credential
//! service, a session gate holding the signed-in user, and guarded
//! navigation between placeholder course pages.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs           - Module exports and documentation
//! ├── main.rs          - Application entry point (binary)
//! ├── config.rs        - Client configuration (server URL)
//! ├── auth.rs          - AuthApi trait and HTTP client
//! ├── session.rs       - SessionGate: session, loading flag, worker threads
//! ├── routes.rs        - Route table and guards
//! ├── notifications.rs - Toast queue
//! ├── state/           - AppState driving the views
//! ├── views/           - egui rendering
//! └── theme/           - Colors and frame styles
//! ```
//!
//! # Threading
//!
//! The UI thread never blocks on the network. `SessionGate` runs each
//! login/signup on its own thread and the UI polls for the result once per
//! frame.

pub mod config;
pub mod auth;
pub mod session;
pub mod routes;
pub mod notifications;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use auth::{AuthApi, ClientError, HttpAuthApi};
pub use config::Config;
pub use routes::{guard, resolve, Access, Navigation, Route};
pub use session::{AuthAction, AuthOutcome, Session, SessionGate};
pub use state::AppState;
