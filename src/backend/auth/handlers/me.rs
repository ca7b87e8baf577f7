/**
 * Get Current Account Handler
 *
 * GET /api/auth/me
 *
 * Requires `Authorization: Bearer <token>`. The token is checked by
 * `auth_middleware`, which leaves the resolved account in the request
 * extensions.
 */

use axum::response::Json;

use crate::backend::middleware::AuthUser;
use crate::shared::UserSummary;

/// Return the account the bearer token belongs to
pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserSummary> {
    tracing::debug!("Current account requested: {}", user.account_id);
    Json(user.summary)
}
