/**
 * Account Model
 *
 * The durable identity record: user name, email, bcrypt hash and role.
 */

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::{Role, UserSummary};

/// Account as stored
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique account ID
    pub id: Uuid,
    /// User name (unique)
    pub user_name: String,
    /// Email address (unique)
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// The client-facing view of this account
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.to_string(),
            user_name: self.user_name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

// Keeps the hash out of logs.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Account about to be inserted
#[derive(Clone)]
pub struct NewAccount {
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewAccount {
    /// New account with the default role
    pub fn new(user_name: String, email: String, password_hash: String) -> Self {
        Self {
            user_name,
            email,
            password_hash,
            role: Role::default(),
        }
    }

    /// Assign an ID and creation time
    pub fn into_account(self) -> Account {
        Account {
            id: Uuid::new_v4(),
            user_name: self.user_name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            created_at: Utc::now(),
        }
    }
}
