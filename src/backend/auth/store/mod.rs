//! Account Storage
//!
//! `AccountStore` is the seam between the credential service and whatever
//! holds the accounts. Two backends exist:
//!
//! - **`postgres`** - `PgAccountStore`, used when `DATABASE_URL` is set.
//!   The schema declares UNIQUE constraints on `email` and `user_name`, so a
//!   duplicate insert that races past the service's pre-check still fails
//!   with [`StoreError::Duplicate`].
//! - **`memory`** - `MemoryAccountStore`, used for local development and
//!   tests. Check and insert happen under one write lock.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::accounts::{Account, NewAccount};

pub mod memory;
pub mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// Account store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Email or user name already taken
    #[error("an account with this email or user name already exists")]
    Duplicate,

    /// Database driver error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored row could not be turned into an account
    #[error("corrupt account record: {0}")]
    Corrupt(String),
}

/// Persistent account storage
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Look up an account by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Look up an account whose email or user name matches
    async fn find_by_email_or_user_name(
        &self,
        email: &str,
        user_name: &str,
    ) -> Result<Option<Account>, StoreError>;

    /// Look up an account by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError>;

    /// Insert a new account
    ///
    /// Returns [`StoreError::Duplicate`] if the email or user name is taken.
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;

    /// Number of stored accounts
    async fn count(&self) -> Result<u64, StoreError>;
}
