//! Handlers for short code resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{code}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns 400 if the code is blank.
/// Returns 404 Not Found if the code was never issued.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if code.trim().is_empty() {
        return Err(missing_code());
    }

    let link = state.link_service.get_link_by_code(&code).await?;
    let location = location_header(&link.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Answers a resolve request that carries no code.
///
/// # Endpoint
///
/// `GET /api/shorturl`
pub async fn missing_code_handler() -> AppError {
    missing_code()
}

fn missing_code() -> AppError {
    AppError::bad_request("url code is missing")
}

/// Builds the `Location` value for a stored URL.
///
/// The stored string is used as-is when it is a legal header value.
/// Otherwise (e.g. non-ASCII characters) the URL's serialized form, which is
/// always ASCII, is used instead.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "url": original_url }),
            )
        })
}
