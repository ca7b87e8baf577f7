//! Account Wire Types
//!
//! Request and response bodies exchanged between the desktop client and the
//! credential service, plus the account role enumeration.
//!
//! Field names follow the JSON the service speaks (`userName`, camelCase),
//! so both sides can serialize these types directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::error::SharedError;

/// Message returned for any missing registration or login field
pub const MISSING_FIELDS: &str = "All fields are required";

/// Role attached to an account
///
/// New accounts always start as [`Role::Student`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Professor,
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professor => "professor",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "professor" => Ok(Role::Professor),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::Superadmin),
            other => Err(SharedError::validation("role", format!("unknown role '{}'", other))),
        }
    }
}

/// Public view of an account
///
/// This is everything a client ever learns about an account. It carries no
/// password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

/// Registration request
///
/// Missing keys and JSON `null` deserialize to empty strings so that the
/// service can answer with its own validation message instead of a decoder
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub user_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

impl RegisterRequest {
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Every field must be non-empty
    pub fn validate(&self) -> Result<(), SharedError> {
        require("userName", &self.user_name)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty
    pub fn validate(&self) -> Result<(), SharedError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Successful register/login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Human-readable outcome ("Login successful", ...)
    pub message: String,
    /// Signed session token
    pub token: String,
    pub user: UserSummary,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.is_empty() {
        return Err(SharedError::validation(field, MISSING_FIELDS));
    }
    Ok(())
}
