//! Hostname resolution for the resolvability check.
//!
//! Provides a [`HostResolver`] trait with two implementations:
//! - [`TokioResolver`] - OS resolver lookups with a timeout and retries
//! - [`NoopResolver`] - Accepts every host, used when the check is disabled

mod noop_resolver;
mod service;
mod tokio_resolver;

pub use noop_resolver::NoopResolver;
pub use service::{HostResolver, ResolveError};
pub use tokio_resolver::TokioResolver;

#[cfg(test)]
pub use service::MockHostResolver;
