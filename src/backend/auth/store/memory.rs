/**
 * In-Memory Account Store
 *
 * Accounts live in a `Vec` behind a tokio `RwLock`. Nothing survives a
 * restart.
 */

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AccountStore, StoreError};
use crate::backend::auth::accounts::{Account, NewAccount};

/// Account store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_email_or_user_name(
        &self,
        email: &str,
        user_name: &str,
    ) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.email == email || a.user_name == user_name)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;

        let taken = accounts
            .iter()
            .any(|a| a.email == account.email || a.user_name == account.user_name);
        if taken {
            return Err(StoreError::Duplicate);
        }

        let account = account.into_account();
        accounts.push(account.clone());
        Ok(account)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.accounts.read().await.len() as u64)
    }
}
