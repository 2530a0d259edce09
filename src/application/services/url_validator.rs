//! URL acceptance policy.

use std::sync::Arc;

use url::{Host, Url};

use crate::infrastructure::dns::{HostResolver, ResolveError};

/// Why a candidate URL was rejected.
///
/// Callers only ever see "invalid url"; the variants exist for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum InvalidUrl {
    #[error("url is missing")]
    Missing,

    #[error("url is malformed: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("scheme '{0}' is not allowed")]
    UnsupportedScheme(String),

    #[error("url has no host")]
    MissingHost,

    #[error("host does not resolve: {0}")]
    Unresolvable(#[from] ResolveError),
}

/// Decides whether a submitted string is an acceptable URL to shorten.
///
/// Checks run in order and stop at the first failure:
///
/// 1. **Presence** - `None`, empty, and whitespace-only input are rejected
/// 2. **Syntax** - must parse as an absolute `http`/`https` URL with a host
/// 3. **Resolvability** - domain hosts must resolve via the configured
///    [`HostResolver`]; IP literals are accepted as-is
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    /// Creates a validator that checks hosts with `resolver`.
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Validates `candidate` and returns its parsed form.
    ///
    /// The parsed [`Url`] is for inspection only; callers store the string
    /// they were given, unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidUrl`] reason encountered.
    pub async fn validate(&self, candidate: Option<&str>) -> Result<Url, InvalidUrl> {
        let candidate = candidate
            .filter(|c| !c.trim().is_empty())
            .ok_or(InvalidUrl::Missing)?;

        let url = Url::parse(candidate)?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(InvalidUrl::UnsupportedScheme(other.to_string())),
        }

        match url.host() {
            Some(Host::Domain(domain)) => self.resolver.resolve(domain).await?,
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
            None => return Err(InvalidUrl::MissingHost),
        }

        Ok(url)
    }

    /// Describes the resolver in use, for the health report.
    pub fn resolver_description(&self) -> String {
        self.resolver.describe()
    }
}
