//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use tracing::info;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Validates a URL and issues a short code for it.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// Form-encoded bodies (`url=https%3A%2F%2Fexample.com`) are accepted too.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_url": "V1StGXR8_Z5jdHi6B-myT"
/// }
/// ```
///
/// `original_url` echoes the submitted string unchanged.
///
/// # Errors
///
/// Returns 400 `{"error": "invalid url"}` if the URL is missing, malformed,
/// or its host does not resolve.
/// Returns 500 if no unique code could be issued.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: ShortenRequest,
) -> Result<Json<ShortenResponse>, AppError> {
    state
        .url_validator
        .validate(payload.url.as_deref())
        .await?;

    // Validation passed, so the field is present.
    let original_url = payload.url.unwrap_or_default();

    let link = state.link_service.shorten(original_url).await?;

    info!(code = %link.code, url = %link.original_url, "Short link created");

    Ok(Json(ShortenResponse {
        original_url: link.original_url,
        short_url: link.code,
    }))
}
