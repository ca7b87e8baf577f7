//! Common test utilities and helpers
//!
//! Builds the credential service over an in-memory store with a cheap bcrypt
//! cost, either as an `axum-test` server or as a real listener on localhost.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use eduplatform::backend::auth::{AccountStore, MemoryAccountStore};
use eduplatform::backend::server::{create_app_with_store, ServerConfig};

/// bcrypt cost used by every test
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        bcrypt_cost: TEST_BCRYPT_COST,
        ..ServerConfig::default()
    }
}

/// Test server plus a handle on its store
pub fn test_server() -> (TestServer, Arc<MemoryAccountStore>) {
    let store = Arc::new(MemoryAccountStore::new());
    let app = create_app_with_store(&test_config(), store.clone() as Arc<dyn AccountStore>);
    let server = TestServer::new(app).expect("Failed to start test server");
    (server, store)
}

pub fn register_body(user_name: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "userName": user_name,
        "email": email,
        "password": password
    })
}

pub fn login_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": password
    })
}

/// Serve the app on an ephemeral localhost port
///
/// Returns the base URL and the runtime driving the server; dropping the
/// runtime stops it.
pub fn spawn_http_server() -> (String, tokio::runtime::Runtime) {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to build runtime");

    let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
    let app = create_app_with_store(&test_config(), store);

    let listener = runtime
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    runtime.spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}", addr), runtime)
}
