//! # User Repository
//!
//! Database access layer for user records, following the repository
//! pattern over plain SQL queries.
//!
//! Lookups and inserts are keyed by email. Callers normalize the email
//! before it gets here, so lookup and insert always agree on case.

use super::models::{User, UserForCreate};
use super::DbPool;
use sqlx::query_as;

/// User repository for database operations.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by their email address.
    ///
    /// Returns `Ok(None)` when no user has that email.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user and return the stored record.
    ///
    /// The UNIQUE index on `email` is the authoritative duplicate guard:
    /// a conflicting insert surfaces as a unique-violation database error
    /// no matter what any earlier `find_by_email` check said.
    pub async fn create(pool: &DbPool, user: UserForCreate) -> Result<User, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(pool)
            .await?;

        let id = result.last_insert_rowid();

        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> DbPool {
        // One connection: every pooled connection to :memory: would
        // otherwise get its own empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        sqlx::query(
            r#"
            CREATE TABLE users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await
        .expect("Failed to create users table");

        pool
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let pool = test_pool().await;

        let created =
            UserRepository::create(&pool, UserForCreate::new("Ada", "ada@example.com", "digest"))
                .await
                .unwrap();
        assert_eq!(created.name, "Ada");

        let found = UserRepository::find_by_email(&pool, "ada@example.com")
            .await
            .unwrap()
            .expect("user should exist");
        assert_eq!(found.id, created.id);

        let missing = UserRepository::find_by_email(&pool, "eve@example.com")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_conflicting_insert_maps_to_duplicate_account() {
        let pool = test_pool().await;

        UserRepository::create(&pool, UserForCreate::new("Ada", "ada@example.com", "digest"))
            .await
            .unwrap();

        let err =
            UserRepository::create(&pool, UserForCreate::new("Eve", "ada@example.com", "digest"))
                .await
                .unwrap_err();

        assert!(matches!(AppError::from(err), AppError::DuplicateAccount));
    }
}
