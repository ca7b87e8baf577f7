/**
 * PostgreSQL Account Store
 *
 * Accounts are kept in the `accounts` table created by
 * `migrations/20250101000000_create_accounts.sql`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{AccountStore, StoreError};
use crate::backend::auth::accounts::{Account, NewAccount};

/// Account row as returned by sqlx
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    user_name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = StoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse()
            .map_err(|_| StoreError::Corrupt(format!("account {} has role '{}'", row.id, row.role)))?;

        Ok(Account {
            id: row.id,
            user_name: row.user_name,
            email: row.email,
            password_hash: row.password_hash,
            role,
            created_at: row.created_at,
        })
    }
}

fn into_account(row: Option<AccountRow>) -> Result<Option<Account>, StoreError> {
    row.map(Account::try_from).transpose()
}

/// Account store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, user_name, email, password_hash, role, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        into_account(row)
    }

    async fn find_by_email_or_user_name(
        &self,
        email: &str,
        user_name: &str,
    ) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, user_name, email, password_hash, role, created_at
            FROM accounts
            WHERE email = $1 OR user_name = $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        into_account(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, user_name, email, password_hash, role, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        into_account(row)
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (id, user_name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_name, email, password_hash, role, created_at
            "#,
        )
        .bind(id)
        .bind(&account.user_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::Duplicate,
            other => StoreError::Database(other),
        })?;

        Account::try_from(row)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
