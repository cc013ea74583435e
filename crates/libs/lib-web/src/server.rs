//! # Server Setup
//!
//! Router construction, state wiring, and HTTP server startup.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, require_auth, AUTH_TOKEN_HEADER};
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use lib_auth::TokenService;
use lib_core::{create_pool, Config, DbPool};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
///
/// The token service is built once from configuration and immutable
/// afterwards; there is no runtime secret rotation.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub tokens: TokenService,
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server startup configuration.
pub struct ServerConfig {
    /// Database migrations path
    pub migrations_path: &'static str,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            migrations_path: "./migrations",
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}
// endregion: --- Server Configuration

// region: --- Router
/// Build the application router for the given state.
///
/// The two token-issuing endpoints are public; `GET /api/auth` sits behind
/// the authentication gate.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth", get(handlers::auth::me))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/api/users", post(handlers::auth::register))
        .route("/api/auth", post(handlers::auth::login))
        .merge(protected)
        .layer(axum::middleware::from_fn(log_requests))
        .with_state(state)
}
// endregion: --- Router

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration loading or validation fails (including a missing or
///   too-short `JWT_SECRET` - there is no degraded mode without a secret)
/// - Database connection or migrations fail
/// - Server binding fails
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("Connecting to database: {}", config.database_url);
    ensure_sqlite_dir(&config.database_url)?;
    let pool = create_pool(&config.database_url).await?;

    info!("Running migrations from: {}", server_config.migrations_path);
    let migrator =
        sqlx::migrate::Migrator::new(std::path::Path::new(server_config.migrations_path)).await?;
    migrator.run(&pool).await?;

    let state = AppState {
        db: pool,
        tokens: TokenService::new(&config.jwt_secret, config.token_ttl_secs),
    };

    let cors = cors_layer(&server_config.allowed_origins)?;
    let router = app(state).layer(cors);

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Create the parent directory for a SQLite database file if needed.
fn ensure_sqlite_dir(database_url: &str) -> std::io::Result<()> {
    if let Some(path) = database_url.strip_prefix("sqlite:") {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(AUTH_TOKEN_HEADER),
        ]))
}
// endregion: --- Server Setup
