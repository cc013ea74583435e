//! # Application Configuration
//!
//! Configuration is loaded from environment variables once at startup and
//! validated so the process fails fast if misconfigured. The loaded values
//! are handed to the components that need them; in particular the token
//! service receives the signing secret at construction, and nothing reads
//! the environment at request time.

use lib_utils::envs::{get_env, get_env_or};

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for session token signing and verification.
    ///
    /// Must be at least 32 characters long.
    pub jwt_secret: String,

    /// Session token validity period in seconds.
    pub token_ttl_secs: i64,

    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `JWT_SECRET` is an error here and fatal at startup; there
    /// is no per-request fallback.
    pub fn from_env() -> Result<Self, String> {
        let database_url = get_env_or("DATABASE_URL", "sqlite:data/gatehouse.db");

        let jwt_secret =
            get_env("JWT_SECRET").map_err(|_| "JWT_SECRET must be set in environment")?;

        let token_ttl_secs = get_env_or("TOKEN_TTL_SECS", "3600")
            .parse()
            .map_err(|e| format!("TOKEN_TTL_SECS must be a valid number: {e}"))?;

        let bind_addr = get_env_or("BIND_ADDR", "127.0.0.1:3001");

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_secs,
            bind_addr,
        })
    }

    /// Validate configuration values against security rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.token_ttl_secs < 60 || self.token_ttl_secs > 86_400 {
            return Err("TOKEN_TTL_SECS must be between 60 and 86400 (one day)".to_string());
        }

        Ok(())
    }
}
