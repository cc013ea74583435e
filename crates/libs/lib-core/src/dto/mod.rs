//! # Data Transfer Objects (DTOs)
//!
//! Request and response structures for the REST API.

pub mod auth;

pub use auth::*;
