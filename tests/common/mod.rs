#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shorturl::application::services::{LinkService, UrlValidator};
use shorturl::infrastructure::dns::{HostResolver, ResolveError};
use shorturl::infrastructure::persistence::InMemoryLinkRepository;
use shorturl::routes::router;
use shorturl::state::AppState;
use std::collections::HashSet;
use std::sync::Arc;

/// Resolver that only knows a fixed set of hosts, so tests never hit DNS.
pub struct FakeResolver {
    known: HashSet<String>,
}

impl FakeResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            known: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for FakeResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        if self.known.contains(host) {
            Ok(())
        } else {
            Err(ResolveError::NoAddresses {
                host: host.to_string(),
            })
        }
    }

    fn describe(&self) -> String {
        "fake resolver".to_string()
    }
}

pub const KNOWN_HOSTS: &[&str] = &["example.com", "www.example.com", "rust-lang.org"];

pub fn create_test_state() -> AppState {
    let link_service = Arc::new(LinkService::new(Arc::new(InMemoryLinkRepository::new())));
    let url_validator = Arc::new(UrlValidator::new(Arc::new(FakeResolver::new(KNOWN_HOSTS))));

    AppState::new(link_service, url_validator)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}
