/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in account. It reads the bearer
 * token from the Authorization header, resolves it through the credential
 * service and attaches the account to the request extensions.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::service::CredentialService;
use crate::backend::error::BackendError;
use crate::shared::{Role, UserSummary};

/// Authenticated account data extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub account_id: Uuid,
    pub role: Role,
    pub summary: UserSummary,
}

/// Authentication middleware
///
/// Returns 401 if the header is missing, is not a bearer token, or names a
/// token that fails verification.
pub async fn auth_middleware(
    State(service): State<CredentialService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(&request).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::unauthorized("Missing bearer token")
    })?;

    let account = service.current_account(token).await?;

    request.extensions_mut().insert(AuthenticatedUser {
        account_id: account.id,
        role: account.role,
        summary: account.summary(),
    });

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Axum extractor for the authenticated account
///
/// Only usable behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Missing bearer token")
            })?;

        Ok(AuthUser(user))
    }
}
