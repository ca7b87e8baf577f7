/**
 * Credential Service
 *
 * Registration and login rules, independent of HTTP. Handlers deserialize a
 * request, call into this service and wrap the result.
 *
 * # Register
 *
 * 1. Every field must be non-empty
 * 2. Neither the email nor the user name may already exist
 * 3. The password is hashed with bcrypt
 * 4. The account is stored with role `student`
 * 5. A session token is issued for the new account
 *
 * # Login
 *
 * 1. Both fields must be non-empty
 * 2. The account is looked up by exact email
 * 3. The password is compared against the stored hash
 * 4. A session token is issued
 *
 * Unknown email and wrong password both end in `InvalidCredentials`.
 */

use std::sync::Arc;

use crate::backend::auth::accounts::{Account, NewAccount};
use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::store::{AccountStore, StoreError};
use crate::backend::error::BackendError;
use crate::shared::{LoginRequest, RegisterRequest, UserSummary};

/// Message returned when the email or user name is taken
pub const DUPLICATE_ACCOUNT: &str = "Username or Email already exists";

/// Token plus public account view, returned by register and login
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub user: UserSummary,
}

/// Registration, login and token resolution over an account store
#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn AccountStore>,
    tokens: TokenIssuer,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(store: Arc<dyn AccountStore>, tokens: TokenIssuer, bcrypt_cost: u32) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost,
        }
    }

    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Create an account and issue its first token
    pub async fn register(&self, request: RegisterRequest) -> Result<IssuedSession, BackendError> {
        request.validate()?;

        let RegisterRequest {
            user_name,
            email,
            password,
        } = request;

        if self
            .store
            .find_by_email_or_user_name(&email, &user_name)
            .await?
            .is_some()
        {
            tracing::warn!("Registration rejected, identity taken: {} / {}", user_name, email);
            return Err(BackendError::conflict(DUPLICATE_ACCOUNT));
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;

        let account = self
            .store
            .insert(NewAccount::new(user_name, email, password_hash))
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration
                StoreError::Duplicate => {
                    tracing::warn!("Registration rejected by store uniqueness check");
                    BackendError::conflict(DUPLICATE_ACCOUNT)
                }
                other => BackendError::from(other),
            })?;

        tracing::info!("Account registered: {} ({})", account.user_name, account.id);

        self.issue(&account)
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, request: LoginRequest) -> Result<IssuedSession, BackendError> {
        request.validate()?;

        let LoginRequest { email, password } = request;

        let account = match self.store.find_by_email(&email).await? {
            Some(account) => account,
            None => {
                tracing::warn!("Login failed, no account for: {}", email);
                return Err(BackendError::InvalidCredentials);
            }
        };

        let valid = verify_password(password, account.password_hash.clone()).await?;
        if !valid {
            tracing::warn!("Login failed, wrong password for: {}", email);
            return Err(BackendError::InvalidCredentials);
        }

        tracing::info!("Account logged in: {} ({})", account.user_name, account.id);

        self.issue(&account)
    }

    /// Resolve a bearer token to the account it names
    pub async fn current_account(&self, token: &str) -> Result<Account, BackendError> {
        let claims = self.tokens.verify(token).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            BackendError::unauthorized("Invalid or expired token")
        })?;

        let account_id = claims.account_id().map_err(|_| {
            tracing::warn!("Token subject is not an account ID: {}", claims.sub);
            BackendError::unauthorized("Invalid or expired token")
        })?;

        self.store.find_by_id(account_id).await?.ok_or_else(|| {
            tracing::warn!("Token names a missing account: {}", account_id);
            BackendError::unauthorized("Account no longer exists")
        })
    }

    fn issue(&self, account: &Account) -> Result<IssuedSession, BackendError> {
        let token = self.tokens.issue(account.id, account.role)?;
        Ok(IssuedSession {
            token,
            user: account.summary(),
        })
    }
}
