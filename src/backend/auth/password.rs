/**
 * Password Hashing
 *
 * This module wraps bcrypt for credential storage. Every hash gets a fresh
 * random salt, and the salt and cost are encoded into the returned string
 * so `verify` needs nothing but the stored value.
 *
 * bcrypt is CPU bound on purpose, so both operations run on Tokio's blocking
 * pool instead of the request executor.
 */

use thiserror::Error;

use crate::shared::config::DEFAULT_BCRYPT_COST;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input (bad cost, malformed stored hash, ...)
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking task was cancelled or panicked
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Salted one-way password hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Hasher with the production work factor (12)
    pub fn new() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Hasher with an explicit work factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    ///
    /// Two calls with the same input return different strings; both verify.
    pub async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
        Ok(hashed)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch. A stored value that is not a bcrypt
    /// hash is an error.
    pub async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, PasswordError> {
        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hashed)).await??;
        Ok(valid)
    }
}
