/**
 * Session Gate
 *
 * Holds the signed-in user and token for the lifetime of the process and
 * runs login/signup calls off the UI thread.
 *
 * # States
 *
 * - **anonymous**: no session
 * - **authenticated**: a session from the last successful login/signup
 *
 * Only a successful login/signup or an explicit logout changes state. A
 * failed call leaves the previous state untouched.
 *
 * # Loading
 *
 * `login`/`signup` set `loading`, spawn a worker thread and return at once.
 * `poll` (every frame) or `wait` settles the call and clears `loading`,
 * whether it succeeded, failed, or the worker vanished without answering.
 * Starting a new call while one is outstanding drops the old receiver, so
 * only the latest call settles.
 */

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use crate::egui_app::auth::{AuthApi, ClientError};
use crate::shared::{AuthResponse, LoginRequest, RegisterRequest, UserSummary};

/// Signed-in user and their token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserSummary,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

/// Which call produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
}

/// Result of a settled login/signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub action: AuthAction,
    pub result: Result<UserSummary, ClientError>,
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

type Pending = (AuthAction, Receiver<Result<AuthResponse, ClientError>>);

/// Client-side session state machine
pub struct SessionGate {
    api: Arc<dyn AuthApi>,
    session: Option<Session>,
    loading: bool,
    pending: Option<Pending>,
}

impl SessionGate {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            api,
            session: None,
            loading: false,
            pending: None,
        }
    }

    /// Start a login call
    pub fn login(&mut self, email: impl Into<String>, password: impl Into<String>) {
        let request = LoginRequest::new(email, password);
        tracing::info!("Login started for: {}", request.email);
        self.dispatch(AuthAction::Login, move |api| api.login(&request));
    }

    /// Start a signup call
    pub fn signup(
        &mut self,
        user_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) {
        let request = RegisterRequest::new(user_name, email, password);
        tracing::info!("Signup started for: {}", request.email);
        self.dispatch(AuthAction::Signup, move |api| api.register(&request));
    }

    fn dispatch<F>(&mut self, action: AuthAction, call: F)
    where
        F: FnOnce(&dyn AuthApi) -> Result<AuthResponse, ClientError> + Send + 'static,
    {
        if self.pending.is_some() {
            tracing::debug!("Replacing outstanding {:?} call", action);
        }

        self.loading = true;

        let api = Arc::clone(&self.api);
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = call(api.as_ref());
            // The gate may have moved on to a newer call
            let _ = tx.send(result);
        });

        self.pending = Some((action, rx));
    }

    /// Settle the outstanding call if it has finished
    ///
    /// Never blocks. Returns `None` while the call is still running or when
    /// nothing is outstanding.
    pub fn poll(&mut self) -> Option<AuthOutcome> {
        let (action, received) = {
            let (action, rx) = self.pending.as_ref()?;
            match rx.try_recv() {
                Ok(result) => (*action, result),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => (*action, Err(worker_lost())),
            }
        };
        Some(self.settle(action, received))
    }

    /// Block until the outstanding call settles
    pub fn wait(&mut self) -> Option<AuthOutcome> {
        let (action, rx) = self.pending.as_ref()?;
        let action = *action;
        let received = rx.recv().unwrap_or_else(|_| Err(worker_lost()));
        Some(self.settle(action, received))
    }

    fn settle(&mut self, action: AuthAction, received: Result<AuthResponse, ClientError>) -> AuthOutcome {
        self.pending = None;
        self.loading = false;

        let result = match received {
            Ok(response) => {
                let session = Session::from(response);
                let user = session.user.clone();
                tracing::info!("{:?} succeeded for: {} ({})", action, user.email, user.role);
                self.session = Some(session);
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("{:?} failed: {}", action, e);
                Err(e)
            }
        };

        AuthOutcome { action, result }
    }

    /// Discard the session
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("Logged out: {}", session.user.email);
        }
    }

    pub fn user(&self) -> Option<&UserSummary> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

fn worker_lost() -> ClientError {
    ClientError::Network("authentication worker stopped without a result".to_string())
}
