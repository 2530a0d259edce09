//! API route configuration.

use crate::api::handlers::{missing_code_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`         - Validate a URL and issue a short code
/// - `GET  /shorturl/{code}`  - Redirect to the URL stored under `code`
/// - `GET  /shorturl`         - Resolve request without a code (400)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler).get(missing_code_handler))
        .route("/shorturl/{code}", get(redirect_handler))
}
