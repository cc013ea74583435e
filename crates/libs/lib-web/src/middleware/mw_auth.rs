//! # Authentication Gate
//!
//! Axum middleware guarding protected routes. It extracts the session
//! token from the `x-auth-token` header, verifies it against the token
//! service, and injects the recovered claims into request extensions.
//!
//! Handlers behind the gate extract the claims with `Extension<Claims>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_auth::Claims;
//!
//! async fn protected_handler(Extension(claims): Extension<Claims>) -> String {
//!     format!("Hello, {}!", claims.name)
//! }
//! ```
//!
//! The gate is stateless across requests: one linear pass/fail check, no
//! server-side session.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use lib_auth::TokenService;
use lib_core::AppError;
use tracing::{debug, warn};

/// Request header carrying the session token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Reject the request unless it carries a valid session token.
///
/// - Missing header: [`AppError::MissingToken`] (401)
/// - Tampered, malformed, or expired token: 401, with the failure kind
///   logged server-side and a fixed message on the wire
/// - Valid token: claims are attached and the request proceeds
///
/// The token itself is never logged.
pub async fn require_auth(
    State(tokens): State<TokenService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] missing {} header", AUTH_TOKEN_HEADER);
            AppError::MissingToken
        })?;

    let claims = tokens.verify(token).map_err(|e| {
        warn!("[AUTH] token verification failed: {}", e);
        AppError::from(e)
    })?;

    debug!("[AUTH] authenticated user: {} (id: {})", claims.name, claims.sub);

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
