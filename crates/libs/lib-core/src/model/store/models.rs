use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User entity as stored in the credential store.
///
/// `password_hash` is the salted argon2 digest; the plaintext never
/// reaches the store. Records are created by registration and neither
/// mutated nor deleted afterwards.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user.
///
/// The password must already be hashed, and the email already normalized.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl UserForCreate {
    /// Create a new `UserForCreate` instance.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
