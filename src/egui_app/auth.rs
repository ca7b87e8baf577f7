/**
 * Authentication Client
 *
 * HTTP client for the credential service. `AuthApi` is the seam the
 * session gate talks to; `HttpAuthApi` is the real implementation.
 *
 * Calls are synchronous: each builds a single-threaded tokio runtime and a
 * fresh `reqwest::Client`, then blocks on the request. Pooled connections
 * belong to the runtime that opened them, so nothing is shared between
 * calls. Run these on a worker thread, never on the UI thread.
 */

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::Builder;

use crate::egui_app::config::Config;
use crate::shared::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest, SharedError};

/// Client-side authentication failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request never got an HTTP answer
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with an error status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The service answered with a body we could not read
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The form was rejected before sending
    #[error(transparent)]
    Validation(#[from] SharedError),
}

impl ClientError {
    /// Message suitable for a notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Validation(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

/// Credential service operations used by the session gate
pub trait AuthApi: Send + Sync {
    fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError>;
    fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError>;
}

/// `AuthApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    config: Config,
}

impl HttpAuthApi {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn block_on<T, F>(&self, request: F) -> Result<T, ClientError>
    where
        F: std::future::Future<Output = Result<T, ClientError>>,
    {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create runtime: {}", e)))?;
        rt.block_on(request)
    }
}

impl AuthApi for HttpAuthApi {
    fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        request.validate()?;
        let url = self.config.api_url("/api/auth/login");
        tracing::debug!("POST {}", url);

        self.block_on(async {
            let response = Client::new()
                .post(&url)
                .json(request)
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            read_json(response).await
        })
    }

    fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        request.validate()?;
        let url = self.config.api_url("/api/auth/register");
        tracing::debug!("POST {}", url);

        self.block_on(async {
            let response = Client::new()
                .post(&url)
                .json(request)
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            read_json(response).await
        })
    }
}

/// Decode a success body, or turn an error status into `Rejected`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.to_string()
                } else {
                    text
                }
            });
        return Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use crate::shared::Role;
    use mockito::Matcher;
    use serde_json::json;

    fn api(server: &mockito::Server) -> HttpAuthApi {
        let config = Config::with_builder(AppConfig::builder().server_url(server.url())).unwrap();
        HttpAuthApi::new(config)
    }

    fn auth_body(message: &str) -> String {
        json!({
            "message": message,
            "token": "tok",
            "user": { "id": "1", "userName": "ada", "email": "ada@uni.edu", "role": "student" }
        })
        .to_string()
    }

    #[test]
    fn test_login_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::Json(json!({ "email": "ada@uni.edu", "password": "secret" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(auth_body("Login successful"))
            .create();

        let response = api(&server)
            .login(&LoginRequest::new("ada@uni.edu", "secret"))
            .unwrap();

        mock.assert();
        assert_eq!(response.token, "tok");
        assert_eq!(response.user.role, Role::Student);
    }

    #[test]
    fn test_register_sends_camel_case() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/auth/register")
            .match_body(Matcher::PartialJson(json!({ "userName": "ada" })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(auth_body("User registered successfully"))
            .create();

        let response = api(&server)
            .register(&RegisterRequest::new("ada", "ada@uni.edu", "secret"))
            .unwrap();

        mock.assert();
        assert_eq!(response.message, "User registered successfully");
    }

    #[test]
    fn test_rejection_carries_server_message() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/auth/login")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Invalid credentials","status":400}"#)
            .create();

        let err = api(&server)
            .login(&LoginRequest::new("ada@uni.edu", "wrong"))
            .unwrap_err();

        assert_eq!(
            err,
            ClientError::Rejected {
                status: 400,
                message: "Invalid credentials".to_string()
            }
        );
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_empty_fields_rejected_before_sending() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/api/auth/login").expect(0).create();

        let err = api(&server)
            .login(&LoginRequest::new("", "secret"))
            .unwrap_err();

        mock.assert();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(err.user_message(), "All fields are required");
    }

    #[test]
    fn test_network_error() {
        let config =
            Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:1")).unwrap();
        let err = HttpAuthApi::new(config)
            .login(&LoginRequest::new("ada@uni.edu", "secret"))
            .unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }
}
