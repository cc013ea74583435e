//! # Authentication Handlers
//!
//! Registration, login, and current-user endpoints.
//!
//! Registration orchestrates validation, the duplicate check, password
//! hashing, persistence, and token issuance. The duplicate pre-check is a
//! fast path only; the UNIQUE index on email is what actually prevents two
//! concurrent registrations racing for the same address.

use axum::extract::{Extension, Json, State};
use axum::http::StatusCode;
use lib_auth::token::Claims;
use lib_auth::{hash_password, verify_password, TokenService};
use lib_core::dto::{LoginRequest, RegisterRequest, TokenResponse, UserInfo};
use lib_core::model::store::models::UserForCreate;
use lib_core::model::store::UserRepository;
use lib_core::{AppError, DbPool};
use lib_utils::time::format_time;
use lib_utils::validation::{validate_email, validate_min_length, validate_not_empty};
use tracing::{debug, info, instrument, warn};

/// Canonical form of an email for lookup and insert.
///
/// The store is keyed by the lowercased address, so `Ada@example.com` and
/// `ada@example.com` name the same account.
fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Register handler - creates a new user account.
///
/// On success exactly one record is created and a signed session token is
/// returned; on any failure, none. The plaintext password is dropped as
/// soon as it has been hashed and is never logged.
#[instrument(skip(pool, tokens, req), fields(email = %req.email))]
pub async fn register(
    State(pool): State<DbPool>,
    State(tokens): State<TokenService>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    info!("[REGISTER] new account request");

    validate_not_empty(&req.name, "Name").map_err(AppError::Validation)?;
    validate_email(&req.email).map_err(AppError::Validation)?;
    validate_min_length(&req.password, 6, "Password").map_err(AppError::Validation)?;

    let email = normalize_email(&req.email);

    // Fast-path duplicate check; the UNIQUE index has the final word on
    // conflicting inserts that slip past it.
    if UserRepository::find_by_email(&pool, &email).await?.is_some() {
        warn!("[REGISTER] email already registered");
        return Err(AppError::DuplicateAccount);
    }

    let password_hash = hash_password(&req.password)?;

    let user = UserRepository::create(
        &pool,
        UserForCreate::new(req.name.trim(), email, password_hash),
    )
    .await?;

    let token = tokens.issue(user.id, &user.name)?;

    info!("[REGISTER] account created (id: {})", user.id);

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// Login handler - authenticates an existing user.
///
/// Unknown email and wrong password are reported identically so the
/// endpoint does not reveal which addresses have accounts.
#[instrument(skip(pool, tokens, req))]
pub async fn login(
    State(pool): State<DbPool>,
    State(tokens): State<TokenService>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    debug!("[LOGIN] attempt");

    let email = normalize_email(&req.email);

    let user = UserRepository::find_by_email(&pool, &email)
        .await?
        .ok_or_else(|| {
            warn!("[LOGIN] unknown email");
            AppError::InvalidCredentials
        })?;

    if !verify_password(&req.password, &user.password_hash)? {
        warn!("[LOGIN] wrong password (user id: {})", user.id);
        return Err(AppError::InvalidCredentials);
    }

    let token = tokens.issue(user.id, &user.name)?;

    info!("[LOGIN] authenticated (user id: {})", user.id);

    Ok(Json(TokenResponse { token }))
}

/// Current-user handler, behind the authentication gate.
///
/// The gate has already verified the token and attached the claims; this
/// handler re-reads the full record so the response reflects the store
/// rather than the token payload.
#[instrument(skip(pool, claims), fields(user_id = %claims.sub))]
pub async fn me(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserInfo>, AppError> {
    let id: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::InvalidToken("subject is not a user id".to_string()))?;

    // The store never deletes users, so a verified token pointing at a
    // missing row means the store and the secret are out of sync.
    let user = UserRepository::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::Storage(format!("no user record for authenticated id {id}")))?;

    debug!("[ME] loaded user {}", user.id);

    Ok(Json(UserInfo {
        id: user.id.to_string(),
        name: user.name,
        email: user.email,
        created_at: format_time(user.created_at),
    }))
}

#[cfg(test)]
mod tests;
