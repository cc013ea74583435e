//! # Session Tokens
//!
//! Issues and verifies HS256-signed JWTs carrying the authenticated user's
//! identity. The signing secret is injected at construction; nothing here
//! reads ambient process state.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity claim embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Well-formed and correctly signed, but past its expiry.
    #[error("token expired")]
    Expired,

    /// Structurally invalid, or the signature does not match.
    #[error("token invalid: {0}")]
    Invalid(String),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Signs and verifies session tokens with a process-wide secret.
///
/// Construct one at startup from configuration and share it; issuing and
/// verifying are pure computations over the secret and payload.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    /// Build a service from the signing secret and token lifetime.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a signed token for a user.
    pub fn issue(&self, user_id: i64, name: &str) -> Result<String, Error> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.ttl_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Signing(e.to_string()))
    }

    /// Verify a presented token and recover its claims.
    ///
    /// Expiry is reported separately from every other failure; both deny
    /// access, but callers may log them apart.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => Error::Expired,
                _ => Error::Invalid(e.to_string()),
            })
    }
}
