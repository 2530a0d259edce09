//! Resolver trait and error types.

use async_trait::async_trait;

/// Errors that can occur while resolving a hostname.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup for {host} timed out after {timeout_ms}ms")]
    Timeout { host: String, timeout_ms: u64 },

    #[error("lookup for {host} failed: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lookup for {host} returned no addresses")]
    NoAddresses { host: String },
}

/// Checks that a hostname resolves to at least one address.
///
/// Implementations must never block the calling task's executor thread and
/// must give up within a bounded time.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::TokioResolver`] - real lookups via the OS resolver
/// - [`crate::infrastructure::dns::NoopResolver`] - accepts everything
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host`, discarding the addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the lookup fails, times out, or yields
    /// no addresses.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;

    /// Short human-readable description used by the health report.
    fn describe(&self) -> String;
}
