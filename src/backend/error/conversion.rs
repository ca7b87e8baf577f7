/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Invalid credentials",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;
use crate::shared::ErrorBody;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_unexpected() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        error_response(status, self.message())
    }
}

/// Build a JSON error response
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        message: message.into(),
        status: Some(status.as_u16()),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::store::StoreError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let response = BackendError::conflict("Username or Email already exists").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Username or Email already exists");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_unexpected_response_is_generic() {
        let error: BackendError = StoreError::Corrupt("password=hunter2".to_string()).into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal Server Error");
        assert!(!body.to_string().contains("hunter2"));
    }
}
