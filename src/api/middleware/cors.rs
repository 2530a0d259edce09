//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The API is meant to be called from browser pages served anywhere, so no
/// origin is singled out.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
