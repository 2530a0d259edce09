//! Resolver that accepts every host.

use super::service::{HostResolver, ResolveError};
use async_trait::async_trait;
use tracing::debug;

/// A resolver that does nothing.
///
/// Used when the resolvability check is disabled (`DNS_CHECK=false`), e.g.
/// for offline development or hosts without working DNS. Syntax validation
/// still applies.
pub struct NoopResolver;

impl NoopResolver {
    pub fn new() -> Self {
        debug!("Using NoopResolver (resolvability check disabled)");
        Self
    }
}

impl Default for NoopResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for NoopResolver {
    async fn resolve(&self, _host: &str) -> Result<(), ResolveError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "disabled".to_string()
    }
}
