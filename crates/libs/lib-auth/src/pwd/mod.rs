//! # Password Hashing
//!
//! Salted one-way password digests using Argon2.
//!
//! `hash_password` embeds the salt and parameters in the returned PHC
//! string, so `verify_password` needs nothing beyond the digest itself.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("stored password digest is malformed: {0}")]
    MalformedDigest(String),

    #[error("password verification failed: {0}")]
    Verify(String),
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let digest = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Hash(e.to_string()))?
        .to_string();

    Ok(digest)
}

/// Verify a plaintext password against a stored digest.
///
/// A mismatch returns `Ok(false)`. Any other failure, such as an
/// unparseable digest, is an `Err` and must not be read as a non-match.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(digest).map_err(|e| Error::MalformedDigest(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Verify(e.to_string())),
    }
}
