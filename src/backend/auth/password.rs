/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both are CPU-bound, so they run on
 * tokio's blocking pool instead of a request worker.
 */

use crate::backend::error::BackendError;

/// Cost used when none is configured
pub const DEFAULT_COST: u32 = 10;

/// Hash a password with a fresh salt
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Compare a password against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}
