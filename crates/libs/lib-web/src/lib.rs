//! # Web Library
//!
//! HTTP handlers, middleware, and server setup.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{app, start_server, AppState, ServerConfig};
