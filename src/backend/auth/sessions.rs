/**
 * Session Tokens
 *
 * HS256 JWTs binding an account ID and role to an expiry. Tokens are not
 * stored on the server; a token is valid as long as its signature checks out
 * and `exp` has not passed.
 */

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::Role;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub sub: String,
    /// Account role at issue time
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Account ID named by `sub`
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Signs and verifies session tokens with a server-held secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: TimeDelta,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: TimeDelta) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token for an account, starting now
    pub fn issue(&self, account_id: Uuid, role: Role) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(account_id, role, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    ///
    /// The output depends only on the inputs and the secret.
    pub fn issue_at(
        &self,
        account_id: Uuid,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = now.timestamp().max(0) as u64;
        let exp = (now + self.ttl).timestamp().max(0) as u64;

        let claims = Claims {
            sub: account_id.to_string(),
            role,
            iat,
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }
}
