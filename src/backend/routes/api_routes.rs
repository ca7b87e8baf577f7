/**
 * API Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - Account registration (public)
 * - `POST /api/auth/login` - Account login (public)
 * - `GET /api/auth/me` - Current account (requires JWT in `Authorization`)
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::service::CredentialService;
use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes are grouped under their own router so the auth
/// middleware only runs for them.
pub fn configure_api_routes(router: Router<AppState>, service: CredentialService) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(service, auth_middleware));

    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .merge(protected)
}
