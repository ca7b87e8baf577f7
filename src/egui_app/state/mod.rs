use std::sync::Arc;
use std::time::Instant;

use crate::egui_app::auth::{AuthApi, HttpAuthApi};
use crate::egui_app::config::Config;
use crate::egui_app::notifications::Notifications;
use crate::egui_app::routes::{resolve, Route};
use crate::egui_app::session::{AuthAction, AuthOutcome, SessionGate};

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match. Please try again.";

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub gate: SessionGate,
    current_route: Route,
    pub user_name_input: String,
    pub email_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub path_input: String,
    pub notifications: Notifications,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::from_env().unwrap_or_else(|e| {
            tracing::warn!("Ignoring CLIENT_API_URL ({}), using {}", e, Config::default().server_url());
            Config::default()
        });
        let api = Arc::new(HttpAuthApi::new(config.clone()));
        Self::with_api(config, api)
    }

    pub fn with_api(config: Config, api: Arc<dyn AuthApi>) -> Self {
        tracing::info!("AppState initialized against {}", config.server_url());

        let mut state = Self {
            config,
            gate: SessionGate::new(api),
            current_route: Route::Root,
            user_name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            path_input: String::new(),
            notifications: Notifications::default(),
        };
        state.navigate(Route::Root);
        state
    }

    /// The route currently on screen, always one the guard allows
    pub fn current_route(&self) -> Route {
        self.current_route
    }

    /// Navigate, applying the route guards
    pub fn navigate(&mut self, route: Route) {
        let resolved = resolve(route, self.gate.is_authenticated());
        if resolved != route {
            tracing::debug!("Redirected {} -> {}", route.path(), resolved.path());
        }
        self.current_route = resolved;
        self.path_input = resolved.path().to_string();
    }

    pub fn navigate_to_path(&mut self, path: &str) {
        self.navigate(Route::from_path(path.trim()));
    }

    pub fn handle_login(&mut self) {
        self.gate.login(self.email_input.clone(), self.password_input.clone());
    }

    pub fn handle_signup(&mut self) {
        if self.password_input != self.confirm_password_input {
            self.notifications.error("Signup failed", PASSWORDS_DO_NOT_MATCH);
            return;
        }

        self.gate.signup(
            self.user_name_input.clone(),
            self.email_input.clone(),
            self.password_input.clone(),
        );
    }

    /// Called every frame: settle pending auth calls and expire toasts
    pub fn check_auth_result(&mut self) {
        self.notifications.prune(Instant::now());

        if let Some(outcome) = self.gate.poll() {
            self.apply_outcome(outcome);
        }
    }

    /// Block until the pending auth call settles
    pub fn wait_for_auth_result(&mut self) {
        if let Some(outcome) = self.gate.wait() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: AuthOutcome) {
        match (outcome.action, &outcome.result) {
            (AuthAction::Login, Ok(_)) => {
                self.notifications.success("Welcome back!", "You have successfully logged in.");
                self.clear_form();
                self.navigate(Route::Dashboard);
            }
            (AuthAction::Signup, Ok(_)) => {
                self.notifications
                    .success("Account created!", "Welcome to EduPlatform. Please verify your email.");
                self.clear_form();
                self.navigate(Route::VerifyAccount);
            }
            (AuthAction::Login, Err(e)) => {
                tracing::debug!("Login error detail: {}", e.user_message());
                self.notifications
                    .error("Login failed", "Please check your credentials and try again.");
            }
            (AuthAction::Signup, Err(e)) => {
                tracing::debug!("Signup error detail: {}", e.user_message());
                self.notifications
                    .error("Signup failed", "Please check your information and try again.");
            }
        }
    }

    pub fn logout(&mut self) {
        self.gate.logout();
        self.clear_form();
        self.navigate(Route::Login);
    }

    /// Switch between the login and signup forms
    pub fn toggle_auth_mode(&mut self) {
        let next = if self.current_route == Route::Signup {
            Route::Login
        } else {
            Route::Signup
        };
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.navigate(next);
    }

    fn clear_form(&mut self) {
        self.user_name_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.confirm_password_input.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::auth::ClientError;
    use crate::egui_app::notifications::NotificationLevel;
    use crate::shared::{AuthResponse, LoginRequest, RegisterRequest, Role, UserSummary};

    /// Accepts only one password
    struct FixedApi;

    impl FixedApi {
        fn answer(password: &str) -> Result<AuthResponse, ClientError> {
            if password != "secret" {
                return Err(ClientError::Rejected {
                    status: 400,
                    message: "Invalid credentials".to_string(),
                });
            }
            Ok(AuthResponse {
                message: "ok".to_string(),
                token: "tok".to_string(),
                user: UserSummary {
                    id: "1".to_string(),
                    user_name: "ada".to_string(),
                    email: "ada@uni.edu".to_string(),
                    role: Role::Student,
                },
            })
        }
    }

    impl AuthApi for FixedApi {
        fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
            Self::answer(&request.password)
        }
        fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
            Self::answer(&request.password)
        }
    }

    fn app() -> AppState {
        AppState::with_api(Config::default(), Arc::new(FixedApi))
    }

    #[test]
    fn test_starts_on_login_page() {
        let app = app();
        assert_eq!(app.current_route(), Route::Login);
        assert_eq!(app.path_input, "/auth/login");
    }

    #[test]
    fn test_successful_login_clears_form_and_opens_dashboard() {
        let mut app = app();
        app.email_input = "ada@uni.edu".to_string();
        app.password_input = "secret".to_string();

        app.handle_login();
        app.wait_for_auth_result();

        assert_eq!(app.current_route(), Route::Dashboard);
        assert!(app.email_input.is_empty());
        assert!(app.password_input.is_empty());
        let toast = app.notifications.latest().unwrap();
        assert_eq!(toast.level, NotificationLevel::Success);
        assert_eq!(toast.title, "Welcome back!");
    }

    #[test]
    fn test_failed_login_stays_on_login_page() {
        let mut app = app();
        app.email_input = "ada@uni.edu".to_string();
        app.password_input = "wrong".to_string();

        app.handle_login();
        app.wait_for_auth_result();

        assert_eq!(app.current_route(), Route::Login);
        assert!(!app.gate.is_loading());
        assert_eq!(app.email_input, "ada@uni.edu");
        let toast = app.notifications.latest().unwrap();
        assert_eq!(toast.level, NotificationLevel::Error);
        assert_eq!(toast.title, "Login failed");
    }

    #[test]
    fn test_password_mismatch_never_dispatches() {
        let mut app = app();
        app.navigate(Route::Signup);
        app.password_input = "secret".to_string();
        app.confirm_password_input = "other".to_string();

        app.handle_signup();

        assert!(!app.gate.is_loading());
        assert_eq!(
            app.notifications.latest().map(|n| n.message.as_str()),
            Some(PASSWORDS_DO_NOT_MATCH)
        );
    }

    #[test]
    fn test_toggle_auth_mode_clears_passwords() {
        let mut app = app();
        app.password_input = "secret".to_string();

        app.toggle_auth_mode();
        assert_eq!(app.current_route(), Route::Signup);
        assert!(app.password_input.is_empty());

        app.toggle_auth_mode();
        assert_eq!(app.current_route(), Route::Login);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut app = app();
        app.email_input = "ada@uni.edu".to_string();
        app.password_input = "secret".to_string();
        app.handle_login();
        app.wait_for_auth_result();

        app.logout();

        assert!(!app.gate.is_authenticated());
        assert_eq!(app.current_route(), Route::Login);
        app.navigate(Route::Courses);
        assert_eq!(app.current_route(), Route::Login);
    }
}
