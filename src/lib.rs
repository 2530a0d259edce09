//! # Short URL Service
//!
//! A small URL shortening service built with Axum. URLs are validated
//! (syntax plus a hostname resolution probe), assigned a random code, kept in
//! process memory, and resolved back through an HTTP redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and repository trait
//! - **Application Layer** ([`application`]) - URL validation and code issuing
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and DNS resolvers
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Storage
//!
//! The mapping is volatile: it lives for the lifetime of the process and is
//! not shared between instances.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"   # Optional
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorturl \
//!      -H 'Content-Type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{InvalidUrl, LinkService, UrlValidator};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::dns::{HostResolver, NoopResolver, ResolveError, TokioResolver};
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
