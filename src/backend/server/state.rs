/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * `CredentialService` is cheap to clone: the account store sits behind an
 * `Arc` and the token issuer only holds keys.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use eduplatform::backend::auth::CredentialService;
 *
 * async fn handler(State(service): State<CredentialService>) {
 *     let _issuer = service.tokens();
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::auth::service::CredentialService;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialService,
}

impl AppState {
    pub fn new(credentials: CredentialService) -> Self {
        Self { credentials }
    }
}

impl FromRef<AppState> for CredentialService {
    fn from_ref(state: &AppState) -> Self {
        state.credentials.clone()
    }
}
