/**
 * Session Tokens
 *
 * This module issues and verifies the bearer tokens handed out at login.
 * Tokens are HS256 JWTs carrying the user's id and the issue time.
 *
 * The signing secret is injected at construction; nothing here reads the
 * environment. Tokens carry no `exp` claim and verification does not
 * require one, so an issued token stays valid until the secret changes.
 */

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: String,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: u64,
}

impl Claims {
    /// Claims for a user, stamped with the current time
    pub fn for_user(id: impl Into<String>) -> Self {
        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self { id: id.into(), iat }
    }
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// No signing secret configured
    #[error("signing secret is not configured")]
    MissingSecret,

    /// Encoding the token failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The token is malformed, tampered with, or signed with another key
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies bearer tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<str>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("configured", &!self.secret.is_empty())
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::from(secret.into()),
        }
    }

    /// Sign a claim set
    ///
    /// # Errors
    ///
    /// `MissingSecret` if the service was built with an empty secret.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        let key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), claims, &key).map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let data = decode::<Claims>(token, &key, &Self::validation()).map_err(TokenError::Invalid)?;
        Ok(data.claims)
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // No expiry is issued, so none is required or checked.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation
    }
}
