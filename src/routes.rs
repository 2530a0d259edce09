//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                - Health check (store size, resolver mode)
//! - `POST /api/shorturl`          - Shorten a URL
//! - `GET  /api/shorturl/{code}`   - Redirect to the stored URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with its middleware stack.
///
/// This is the router integration tests drive directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::public_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] plus trailing-slash
/// normalization, which has to wrap the router from the outside.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
