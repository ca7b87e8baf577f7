/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * opens the account store it names.
 *
 * # Configuration Sources
 *
 * | Variable               | Default                         |
 * |------------------------|---------------------------------|
 * | `SERVER_PORT`          | `3000`                          |
 * | `JWT_SECRET`           | development secret (warns)      |
 * | `TOKEN_TTL_DAYS`       | `30`                            |
 * | `BCRYPT_COST`          | `10`                            |
 * | `DATABASE_URL`         | unset: in-memory store (warns)  |
 * | `CORS_ALLOWED_ORIGINS` | unset: any origin               |
 *
 * # Error Handling
 *
 * Unlike optional services, the account store is required. A malformed
 * variable, an unreachable database or a failed migration stops startup.
 */

use std::sync::Arc;

use chrono::TimeDelta;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::password::DEFAULT_COST;
use crate::backend::auth::store::{AccountStore, MemoryAccountStore, PgAccountStore};

/// Secret used when `JWT_SECRET` is unset
const DEV_JWT_SECRET: &str = "eduplatform-development-secret";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;

/// Costs bcrypt accepts
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Credential service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl: TimeDelta,
    pub bcrypt_cost: u32,
    pub database_url: Option<String>,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl: TimeDelta::days(DEFAULT_TOKEN_TTL_DAYS),
            bcrypt_cost: DEFAULT_COST,
            database_url: None,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(port) = var("SERVER_PORT") {
            config.port = port.parse().map_err(|_| StartupError::InvalidValue {
                name: "SERVER_PORT",
                value: port,
            })?;
        }

        match var("JWT_SECRET") {
            Some(secret) => config.jwt_secret = secret,
            None => tracing::warn!("JWT_SECRET not set. Using the development secret."),
        }

        if let Some(days) = var("TOKEN_TTL_DAYS") {
            let parsed = days.parse::<i64>().ok().filter(|d| (1..=36_500).contains(d));
            let parsed = parsed.ok_or(StartupError::InvalidValue {
                name: "TOKEN_TTL_DAYS",
                value: days,
            })?;
            config.token_ttl = TimeDelta::days(parsed);
        }

        if let Some(cost) = var("BCRYPT_COST") {
            let parsed = cost
                .parse::<u32>()
                .ok()
                .filter(|c| BCRYPT_COST_RANGE.contains(c));
            config.bcrypt_cost = parsed.ok_or(StartupError::InvalidValue {
                name: "BCRYPT_COST",
                value: cost,
            })?;
        }

        config.database_url = var("DATABASE_URL");

        if let Some(origins) = var("CORS_ALLOWED_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        Ok(config)
    }
}

/// Open the account store named by the configuration
///
/// - `DATABASE_URL` set: connect, run migrations, use PostgreSQL
/// - `DATABASE_URL` unset: in-memory store, lost on restart
pub async fn load_store(config: &ServerConfig) -> Result<Arc<dyn AccountStore>, StartupError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Accounts are kept in memory and lost on restart.");
        return Ok(Arc::new(MemoryAccountStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgAccountStore::new(pool)))
}
