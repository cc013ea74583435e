//! # Authentication Data Transfer Objects
//!
//! Defines request and response structures for the registration and
//! authentication endpoints. All DTOs use snake_case JSON field names.
//!
//! - `POST /api/users` - [`RegisterRequest`] -> [`TokenResponse`]
//! - `POST /api/auth` - [`LoginRequest`] -> [`TokenResponse`]
//! - `GET /api/auth` - [`UserInfo`]

use serde::{Deserialize, Serialize};

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful registration or login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// User information (public, safe to send to the client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}
