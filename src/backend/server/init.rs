/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the account store (PostgreSQL or in-memory)
 * 2. Create the token issuer from the configured secret and TTL
 * 3. Wrap both in a `CredentialService`
 * 4. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::service::CredentialService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::store::AccountStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig, StartupError};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the configured database cannot be reached or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing EduPlatform credential service");

    let store = load_store(config).await?;
    Ok(create_app_with_store(config, store))
}

/// Create the application over an already opened account store
pub fn create_app_with_store(config: &ServerConfig, store: Arc<dyn AccountStore>) -> Router<()> {
    let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl);
    let credentials = CredentialService::new(store, tokens, config.bcrypt_cost);

    tracing::info!(
        "Credential service ready (bcrypt cost {}, token TTL {} days)",
        config.bcrypt_cost,
        config.token_ttl.num_days()
    );

    create_router(AppState::new(credentials), config)
}
