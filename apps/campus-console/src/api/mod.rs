//! # HTTP Console Module
//!
//! JSON surface of the console for a browser front end, built on axum.
//! Submissions stay in this process: they restart the cosmetic pipeline and
//! update the snapshot, nothing more.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /catalog` - Incident types, locations, roles and stage labels
//! - `POST /submit` - Submit an incident draft
//! - `GET /progress` - Pipeline progress
//! - `GET /snapshot` - Snapshot and explanation panels
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `CAMPUS_CONSOLE_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `CAMPUS_CONSOLE_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)
//! - `CAMPUS_CONSOLE_API_KEY`: If set, requires Bearer token authentication

mod auth;
mod handlers;
mod middleware;
mod types;

pub use auth::{API_KEY_ENV, get_api_key_from_env};
pub use middleware::{RATE_LIMIT_ENV, create_rate_limiter, get_rate_limit_from_env};
pub use types::{HealthResponse, SnapshotResponse, SubmitResponse};

use crate::console::Console;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use campus_core::CampusError;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Environment variable holding the allowed CORS origins.
pub const CORS_ORIGINS_ENV: &str = "CAMPUS_CONSOLE_CORS_ORIGINS";

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state containing the console session.
#[derive(Clone)]
pub struct AppState {
    pub console: Arc<RwLock<Console>>,
}

impl AppState {
    #[must_use]
    pub fn new(console: Console) -> Self {
        Self {
            console: Arc::new(RwLock::new(console)),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from `CAMPUS_CONSOLE_CORS_ORIGINS`.
///
/// - `*`: any origin
/// - unset or no valid entry: localhost dev servers only
/// - otherwise: the listed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var(CORS_ORIGINS_ENV).ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins ({}=*)", CORS_ORIGINS_ENV);
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", origin);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();

            if allowed.is_empty() {
                tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                restrict_cors(allowed)
            }
        }
        None => build_localhost_cors(),
    }
}

/// Localhost origins used by the front-end dev server and the console itself.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    restrict_cors(origins)
}

fn restrict_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing
/// 2. CORS
/// 3. Rate Limiting (if enabled)
/// 4. Authentication (if configured)
pub fn create_router(state: AppState) -> Router {
    let rate_limit = get_rate_limit_from_env();
    let has_auth = get_api_key_from_env().is_some();

    if has_auth {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!(
            "API key authentication DISABLED. Set {} to require a Bearer token.",
            API_KEY_ENV
        );
    }

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/catalog", get(handlers::catalog_handler))
        .route("/submit", post(handlers::submit_handler))
        .route("/progress", get(handlers::progress_handler))
        .route("/snapshot", get(handlers::snapshot_handler));

    if has_auth {
        router = router.layer(axum_middleware::from_fn(auth::api_key_auth_middleware));
    }

    if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(rate_limit),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer())
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Bind and serve until Ctrl+C.
pub async fn run_server(addr: &str, console: Console) -> Result<(), CampusError> {
    let router = create_router(AppState::new(console));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| CampusError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Campus console listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CampusError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
