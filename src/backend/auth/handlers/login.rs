/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 400 body
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::json_body;
use crate::backend::auth::service::CredentialService;
use crate::backend::error::BackendError;
use crate::shared::{AuthResponse, LoginRequest};

pub const LOGGED_IN: &str = "Login successful";

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ada@uni.edu", "password": "secret" }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, malformed body, or invalid credentials
/// * `500 Internal Server Error` - Store, hashing or signing failure
pub async fn login(
    State(service): State<CredentialService>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let request = json_body(body)?;
    tracing::info!("Login request for: {}", request.email);

    let session = service.login(request).await?;

    Ok(Json(AuthResponse {
        message: LOGGED_IN.to_string(),
        token: session.token,
        user: session.user,
    }))
}
