//! # HTTP Request Handlers
//!
//! Axum request handlers, organized by feature domain.
//!
//! - **[`auth`]**: account registration and session authentication
//!   - `POST /api/users` - register a new account
//!   - `POST /api/auth` - authenticate with email/password
//!   - `GET /api/auth` - fetch the authenticated user (gate-protected)

pub mod auth;
