/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Example Request
 *
 * ```http
 * POST /api/auth/register HTTP/1.1
 * Content-Type: application/json
 *
 * { "userName": "ada", "email": "ada@uni.edu", "password": "secret" }
 * ```
 *
 * # Example Response (201)
 *
 * ```json
 * {
 *   "message": "User registered successfully",
 *   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
 *   "user": { "id": "...", "userName": "ada", "email": "ada@uni.edu", "role": "student" }
 * }
 * ```
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::json_body;
use crate::backend::auth::service::CredentialService;
use crate::backend::error::BackendError;
use crate::shared::{AuthResponse, RegisterRequest};

pub const REGISTERED: &str = "User registered successfully";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, malformed body, or email/user name taken
/// * `500 Internal Server Error` - Store, hashing or signing failure
pub async fn register(
    State(service): State<CredentialService>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let request = json_body(body)?;
    tracing::info!("Register request for: {}", request.email);

    let session = service.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: REGISTERED.to_string(),
            token: session.token,
            user: session.user,
        }),
    ))
}
