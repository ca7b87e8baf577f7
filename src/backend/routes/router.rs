/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` logs every request and response
 * - `CorsLayer` allows any origin, or only the configured ones
 */

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::conversion::error_response;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// ## Routes
///
/// - `GET /` - Service status
/// - `POST /api/auth/register` - Account registration
/// - `POST /api/auth/login` - Account login
/// - `GET /api/auth/me` - Current account (requires authentication)
///
/// ## Fallback
///
/// Unknown routes return a 404 JSON error body.
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let router = Router::new().route("/", get(status));

    let router = configure_api_routes(router, app_state.credentials.clone());

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_origins)),
        )
        .with_state(app_state)
}

async fn status() -> Json<serde_json::Value> {
    Json(json!({ "service": "eduplatform", "status": "ok" }))
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// CORS for the configured origins; an empty list allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    tracing::info!("CORS restricted to {} origin(s)", allowed.len());
    layer.allow_origin(AllowOrigin::list(allowed))
}
