//! # Centralized Error Handling
//!
//! One application-wide error type shared by every crate in the workspace,
//! with a single canonical JSON serialization. Callers always receive
//! `{"errors": [{"code": ..., "msg": ...}]}`; internal detail stays in the
//! server logs.
//!
//! ## Error Categories
//!
//! 1. **Client errors** (400) - [`Validation`](AppError::Validation),
//!    [`DuplicateAccount`](AppError::DuplicateAccount),
//!    [`InvalidCredentials`](AppError::InvalidCredentials)
//! 2. **Authentication failures** (401) - [`MissingToken`](AppError::MissingToken),
//!    [`InvalidToken`](AppError::InvalidToken), [`ExpiredToken`](AppError::ExpiredToken)
//! 3. **Server errors** (500) - [`Storage`](AppError::Storage),
//!    [`Crypto`](AppError::Crypto), [`Config`](AppError::Config)
//!
//! None of these are retried anywhere in the workspace; failures are
//! reported synchronously to the immediate caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering the whole failure taxonomy.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data failed syntactic validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An account already exists for the requested email.
    #[error("account already exists")]
    DuplicateAccount,

    /// Unknown email or wrong password on login.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No token present on a protected request.
    #[error("missing auth token")]
    MissingToken,

    /// Token was structurally invalid or its signature did not match.
    #[error("invalid auth token: {0}")]
    InvalidToken(String),

    /// Token was well-formed and correctly signed, but past its expiry.
    #[error("expired auth token")]
    ExpiredToken,

    /// Credential store failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Hashing or signing failure.
    #[error("crypto error: {0}")]
    Crypto(String),

    /// Configuration error during startup.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DuplicateAccount | AppError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            AppError::MissingToken | AppError::InvalidToken(_) | AppError::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Storage(_) | AppError::Crypto(_) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code for the canonical error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "ValidationFailed",
            AppError::DuplicateAccount => "DuplicateAccount",
            AppError::InvalidCredentials => "InvalidCredentials",
            AppError::MissingToken => "MissingToken",
            AppError::InvalidToken(_) => "InvalidToken",
            AppError::ExpiredToken => "ExpiredToken",
            AppError::Storage(_) => "StorageFailure",
            AppError::Crypto(_) => "CryptoFailure",
            AppError::Config(_) => "ConfigFailure",
        }
    }

    /// Get the message safe to show the caller.
    ///
    /// Internal errors collapse to a generic message, and the two token
    /// failure kinds share one wording so expired and tampered tokens are
    /// indistinguishable on the wire.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::DuplicateAccount => "User already exists".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::MissingToken => "No token, authorization denied".to_string(),
            AppError::InvalidToken(_) | AppError::ExpiredToken => "Token is not valid".to_string(),
            AppError::Storage(_) | AppError::Crypto(_) | AppError::Config(_) => {
                "Server error".to_string()
            }
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Full detail for the server logs; the body below carries none of it.
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                tracing::debug!("client error: {}", self);
            }
            _ => {
                tracing::error!("server error: {}", self);
            }
        }

        let body = Json(json!({
            "errors": [{ "code": self.code(), "msg": self.user_message() }],
        }));

        (status, body).into_response()
    }
}

/// Convert `sqlx::Error` to `AppError`.
///
/// A unique-constraint violation is the storage layer's authoritative
/// answer to a duplicate registration and maps to `DuplicateAccount`;
/// everything else is a storage failure.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateAccount
            }
            _ => AppError::Storage(err.to_string()),
        }
    }
}

/// Convert password hashing errors to `AppError`.
impl From<lib_auth::pwd::Error> for AppError {
    fn from(err: lib_auth::pwd::Error) -> Self {
        AppError::Crypto(err.to_string())
    }
}

/// Convert token errors to `AppError`, preserving the expired/invalid split.
impl From<lib_auth::token::Error> for AppError {
    fn from(err: lib_auth::token::Error) -> Self {
        match err {
            lib_auth::token::Error::Expired => AppError::ExpiredToken,
            lib_auth::token::Error::Invalid(msg) => AppError::InvalidToken(msg),
            lib_auth::token::Error::Signing(msg) => AppError::Crypto(msg),
        }
    }
}
