//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, UrlValidator};
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Handles to the services built once at startup.
///
/// Cloning is cheap; every clone points at the same store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub url_validator: Arc<UrlValidator>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<InMemoryLinkRepository>>,
        url_validator: Arc<UrlValidator>,
    ) -> Self {
        Self {
            link_service,
            url_validator,
        }
    }
}
