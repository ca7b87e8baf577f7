//! Authentication API integration tests
//!
//! Drives the full router (routes, middleware, error conversion) over the
//! in-memory account store.

mod common;

use std::future::IntoFuture;

use axum::http::StatusCode;
use eduplatform::backend::auth::AccountStore;
use eduplatform::shared::{AuthResponse, ErrorBody, Role, UserSummary};
use pretty_assertions::assert_eq;

use common::{login_body, register_body, test_server};

#[tokio::test]
async fn test_register_success() {
    let (server, store) = test_server();

    let response = server
        .post("/api/auth/register")
        .json(&register_body("ada", "ada@uni.edu", "secret"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: AuthResponse = response.json();
    assert_eq!(body.message, "User registered successfully");
    assert!(!body.token.is_empty());
    assert_eq!(body.user.user_name, "ada");
    assert_eq!(body.user.email, "ada@uni.edu");
    assert_eq!(body.user.role, Role::Student);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_response_has_no_password_material() {
    let (server, store) = test_server();

    let response = server
        .post("/api/auth/register")
        .json(&register_body("ada", "ada@uni.edu", "secret"))
        .await;

    let text = response.text();
    let stored = store.find_by_email("ada@uni.edu").await.unwrap().unwrap();

    assert!(!text.contains("secret"));
    assert!(!text.contains(&stored.password_hash));
    assert!(!text.to_lowercase().contains("password"));

    let body: serde_json::Value = response.json();
    let user_keys: Vec<&str> = body["user"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(user_keys.len(), 4);
    for key in ["id", "userName", "email", "role"] {
        assert!(user_keys.contains(&key), "missing {}", key);
    }
}

#[tokio::test]
async fn test_register_same_email_twice() {
    let (server, store) = test_server();
    let body = serde_json::json!({ "userName": "a", "email": "a@x.com", "password": "secret" });

    let first = server.post("/api/auth/register").json(&body).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server
        .post("/api/auth/register")
        .json(&serde_json::json!({ "userName": "b", "email": "a@x.com", "password": "secret" }))
        .await;

    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = second.json();
    assert_eq!(error.message, "Username or Email already exists");
    assert_eq!(error.status, Some(400));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_same_user_name_twice() {
    let (server, store) = test_server();

    server
        .post("/api/auth/register")
        .json(&register_body("ada", "ada@uni.edu", "secret"))
        .await;
    let second = server
        .post("/api/auth/register")
        .json(&register_body("ada", "other@uni.edu", "secret"))
        .await;

    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_registrations() {
    let (server, store) = test_server();

    let (first, second) = tokio::join!(
        server
            .post("/api/auth/register")
            .json(&register_body("ada", "ada@uni.edu", "secret"))
            .into_future(),
        server
            .post("/api/auth/register")
            .json(&register_body("ada", "ada@uni.edu", "secret"))
            .into_future(),
    );

    let mut statuses = vec![first.status_code().as_u16(), second.status_code().as_u16()];
    statuses.sort();
    assert_eq!(statuses, vec![201, 400]);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let (server, store) = test_server();

    for body in [
        serde_json::json!({ "email": "a@x.com", "password": "secret" }),
        serde_json::json!({ "userName": "a", "password": "secret" }),
        serde_json::json!({ "userName": "a", "email": "a@x.com", "password": "" }),
        serde_json::json!({}),
        serde_json::json!({ "userName": null, "email": "a@x.com", "password": "x" }),
        serde_json::json!({ "userName": "a", "email": null, "password": null }),
    ] {
        let response = server.post("/api/auth/register").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let error: ErrorBody = response.json();
        assert_eq!(error.message, "All fields are required");
    }

    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (server, _store) = test_server();

    let response = server
        .post("/api/auth/login")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = response.json();
    assert!(error.message.starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_login_success() {
    let (server, _store) = test_server();

    let registered: AuthResponse = server
        .post("/api/auth/register")
        .json(&register_body("ada", "ada@uni.edu", "secret"))
        .await
        .json();

    let response = server
        .post("/api/auth/login")
        .json(&login_body("ada@uni.edu", "secret"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: AuthResponse = response.json();
    assert_eq!(body.message, "Login successful");
    assert_eq!(body.user, registered.user);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let (server, _store) = test_server();

    server
        .post("/api/auth/register")
        .json(&register_body("ada", "ada@uni.edu", "secret"))
        .await;

    let wrong_password = server
        .post("/api/auth/login")
        .json(&login_body("ada@uni.edu", "not-the-password"))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&login_body("nobody@uni.edu", "secret"))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.text(), unknown_email.text());

    let error: ErrorBody = wrong_password.json();
    assert_eq!(error.message, "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (server, _store) = test_server();

    for body in [
        serde_json::json!({ "email": "ada@uni.edu" }),
        serde_json::json!({ "email": null, "password": "secret" }),
    ] {
        let response = server.post("/api/auth/login").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let error: ErrorBody = response.json();
        assert_eq!(error.message, "All fields are required");
    }
}

#[tokio::test]
async fn test_me_with_token() {
    let (server, _store) = test_server();

    let registered: AuthResponse = server
        .post("/api/auth/register")
        .json(&register_body("ada", "ada@uni.edu", "secret"))
        .await
        .json();

    let response = server
        .get("/api/auth/me")
        .authorization_bearer(&registered.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let user: UserSummary = response.json();
    assert_eq!(user, registered.user);
}

#[tokio::test]
async fn test_me_without_valid_token() {
    let (server, _store) = test_server();

    let missing = server.get("/api/auth/me").await;
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);

    let garbage = server
        .get("/api/auth/me")
        .authorization_bearer("not.a.token")
        .await;
    assert_eq!(garbage.status_code(), StatusCode::UNAUTHORIZED);
    let error: ErrorBody = garbage.json();
    assert_eq!(error.status, Some(401));
}

#[tokio::test]
async fn test_status_and_not_found() {
    let (server, _store) = test_server();

    let status = server.get("/").await;
    assert_eq!(status.status_code(), StatusCode::OK);
    assert_eq!(
        status.json::<serde_json::Value>(),
        serde_json::json!({ "service": "eduplatform", "status": "ok" })
    );

    let missing = server.get("/api/does-not-exist").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    let error: ErrorBody = missing.json();
    assert_eq!(error.status, Some(404));
}
