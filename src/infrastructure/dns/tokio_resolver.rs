//! Resolver backed by the operating system's name service.

use std::time::Duration;

use async_trait::async_trait;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tracing::debug;

use super::service::{HostResolver, ResolveError};

/// Pause between a failed lookup and the next attempt.
const RETRY_INTERVAL_MS: u64 = 50;

/// Resolves hostnames with [`tokio::net::lookup_host`].
///
/// The lookup runs on tokio's blocking pool (it wraps `getaddrinfo`, so
/// `/etc/hosts` and the system resolver configuration apply) and never
/// blocks a runtime worker. Each attempt is capped by `timeout`; failed
/// attempts are retried `retries` more times.
#[derive(Debug, Clone)]
pub struct TokioResolver {
    timeout: Duration,
    retries: usize,
}

impl TokioResolver {
    pub fn new(timeout: Duration, retries: usize) -> Self {
        Self { timeout, retries }
    }

    async fn lookup_once(&self, host: &str) -> Result<(), ResolveError> {
        let lookup = tokio::net::lookup_host((host, 0));

        match tokio::time::timeout(self.timeout, lookup).await {
            Err(_) => Err(ResolveError::Timeout {
                host: host.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            }),
            Ok(Err(source)) => Err(ResolveError::Lookup {
                host: host.to_string(),
                source,
            }),
            Ok(Ok(mut addrs)) => match addrs.next() {
                Some(addr) => {
                    debug!(host, %addr, "Host resolved");
                    Ok(())
                }
                None => Err(ResolveError::NoAddresses {
                    host: host.to_string(),
                }),
            },
        }
    }
}

#[async_trait]
impl HostResolver for TokioResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        let strategy = FixedInterval::from_millis(RETRY_INTERVAL_MS).take(self.retries);

        Retry::spawn(strategy, || self.lookup_once(host)).await
    }

    fn describe(&self) -> String {
        format!(
            "system resolver (timeout {}ms, {} retries)",
            self.timeout.as_millis(),
            self.retries
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> TokioResolver {
        TokioResolver::new(Duration::from_secs(2), 0)
    }

    #[tokio::test]
    async fn test_resolves_localhost() {
        assert!(resolver().resolve("localhost").await.is_ok());
    }

    #[tokio::test]
    async fn test_reserved_invalid_tld_fails() {
        let result = resolver()
            .resolve("this-host-should-not-resolve.invalid")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_retries_still_fail_for_unresolvable_host() {
        let resolver = TokioResolver::new(Duration::from_secs(2), 2);
        assert!(resolver.resolve("nothing-here.invalid").await.is_err());
    }

    #[test]
    fn test_describe() {
        let resolver = TokioResolver::new(Duration::from_millis(1500), 1);
        assert_eq!(
            resolver.describe(),
            "system resolver (timeout 1500ms, 1 retries)"
        );
    }

    #[test]
    fn test_timeout_error_message() {
        let err = ResolveError::Timeout {
            host: "slow.example".to_string(),
            timeout_ms: 3000,
        };
        assert_eq!(err.to_string(), "lookup for slow.example timed out after 3000ms");
    }
}
