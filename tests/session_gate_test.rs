//! Session gate tests against a live credential service
//!
//! The service runs on an ephemeral localhost port; the gate talks to it
//! through `HttpAuthApi` exactly as the desktop client does.

mod common;

use std::sync::Arc;

use eduplatform::egui_app::{AppState, Config, HttpAuthApi, Route, SessionGate};
use eduplatform::shared::config::AppConfig;

use common::spawn_http_server;

fn client_config(base_url: &str) -> Config {
    Config::with_builder(AppConfig::builder().server_url(base_url)).unwrap()
}

fn gate(base_url: &str) -> SessionGate {
    SessionGate::new(Arc::new(HttpAuthApi::new(client_config(base_url))))
}

#[test]
fn test_signup_then_login_round_trip() {
    let (base_url, _runtime) = spawn_http_server();
    let mut gate = gate(&base_url);

    assert!(!gate.is_loading());
    gate.signup("ada", "ada@uni.edu", "secret");
    assert!(gate.is_loading());
    let outcome = gate.wait().unwrap();
    assert!(!gate.is_loading());
    assert!(outcome.is_success(), "{:?}", outcome.result);

    let signup_user = gate.user().cloned().unwrap();
    gate.logout();
    assert!(!gate.is_authenticated());

    gate.login("ada@uni.edu", "secret");
    assert!(gate.is_loading());
    let outcome = gate.wait().unwrap();
    assert!(!gate.is_loading());
    assert!(outcome.is_success(), "{:?}", outcome.result);
    assert_eq!(gate.user(), Some(&signup_user));
}

#[test]
fn test_loading_resets_after_failures() {
    let (base_url, _runtime) = spawn_http_server();
    let mut gate = gate(&base_url);

    gate.login("nobody@uni.edu", "secret");
    let outcome = gate.wait().unwrap();
    assert!(!outcome.is_success());
    assert!(!gate.is_loading());
    assert!(!gate.is_authenticated());

    gate.signup("", "ada@uni.edu", "secret");
    let outcome = gate.wait().unwrap();
    assert!(!outcome.is_success());
    assert!(!gate.is_loading());
}

#[test]
fn test_loading_resets_when_server_unreachable() {
    let mut gate = gate("http://127.0.0.1:1");

    gate.login("ada@uni.edu", "secret");
    let outcome = gate.wait().unwrap();
    assert!(!outcome.is_success());
    assert!(!gate.is_loading());
}

#[test]
fn test_app_navigation_follows_session() {
    let (base_url, _runtime) = spawn_http_server();
    let config = client_config(&base_url);
    let api = Arc::new(HttpAuthApi::new(config.clone()));
    let mut app = AppState::with_api(config, api);

    // Anonymous: everything protected lands on the login page
    assert_eq!(app.current_route(), Route::Login);
    app.navigate_to_path("/grades");
    assert_eq!(app.current_route(), Route::Login);

    // Signup lands on the dashboard, since the verify page is public
    app.navigate(Route::Signup);
    app.user_name_input = "ada".to_string();
    app.email_input = "ada@uni.edu".to_string();
    app.password_input = "secret".to_string();
    app.confirm_password_input = "secret".to_string();
    app.handle_signup();
    app.wait_for_auth_result();

    assert!(app.gate.is_authenticated());
    assert_eq!(app.current_route(), Route::Dashboard);
    assert_eq!(
        app.notifications.latest().map(|n| n.title.as_str()),
        Some("Account created!")
    );

    app.navigate_to_path("/grades");
    assert_eq!(app.current_route(), Route::Grades);
    app.navigate_to_path("/auth/login");
    assert_eq!(app.current_route(), Route::Dashboard);
    app.navigate_to_path("/no-such-page");
    assert_eq!(app.current_route(), Route::NotFound);

    // Logout locks protected pages again
    app.logout();
    assert_eq!(app.current_route(), Route::Login);
    app.navigate_to_path("/dashboard");
    assert_eq!(app.current_route(), Route::Login);

    // Until the next successful login
    app.email_input = "ada@uni.edu".to_string();
    app.password_input = "secret".to_string();
    app.handle_login();
    app.wait_for_auth_result();
    assert_eq!(app.current_route(), Route::Dashboard);
}

#[test]
fn test_signup_with_mismatched_passwords_is_not_sent() {
    let (base_url, _runtime) = spawn_http_server();
    let config = client_config(&base_url);
    let api = Arc::new(HttpAuthApi::new(config.clone()));
    let mut app = AppState::with_api(config, api);

    app.navigate(Route::Signup);
    app.user_name_input = "ada".to_string();
    app.email_input = "ada@uni.edu".to_string();
    app.password_input = "secret".to_string();
    app.confirm_password_input = "secrte".to_string();
    app.handle_signup();

    assert!(!app.gate.is_loading());
    assert_eq!(
        app.notifications.latest().map(|n| n.message.as_str()),
        Some("Passwords do not match. Please try again.")
    );
}
