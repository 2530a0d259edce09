//! Application layer services implementing business logic.
//!
//! Services coordinate repository and resolver calls and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Decides whether a URL may be shortened
//! - [`services::link_service::LinkService`] - Code generation, storage and lookup

pub mod services;
