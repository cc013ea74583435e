//! # Credential Store
//!
//! SQLite connection pool and the user repository.

// region: --- Modules
pub mod models;
pub mod user_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use user_repository::UserRepository;
// endregion: --- Re-exports

// region: --- Types and Functions
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

/// Type alias for the SQLite connection pool.
pub type DbPool = SqlitePool;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    SqlitePool::connect_with(options).await
}
// endregion: --- Types and Functions
