//! # Middleware
//!
//! Axum middleware for the authentication gate and request logging.

// region: --- Modules
pub mod mw_auth;
pub mod mw_logging;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_auth::{require_auth, AUTH_TOKEN_HEADER};
pub use mw_logging::log_requests;
// endregion: --- Re-exports
