//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags (see `main.rs`) may override a few values.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT`)
//! - `PORT` - Port used when `LISTEN` is not set (default: `3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DNS_CHECK` - Reject URLs whose host does not resolve (default: `true`)
//! - `DNS_TIMEOUT_MS` - Per-attempt resolution timeout (default: 3000, range 1-60000)
//! - `DNS_RETRIES` - Extra resolution attempts after a failure (default: 1, max: 5)
//! - `CODE_LENGTH` - Length of generated codes (default: 21, range 8-64)
//! - `CODE_MAX_ATTEMPTS` - Code generation attempts on collision (default: 10, range 1-100)
//!
//! No variable is required; an empty environment yields a working service.

use anyhow::Result;
use std::env;
use std::time::Duration;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

const DEFAULT_PORT: &str = "3000";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When false, hosts are not resolved and only URL syntax is checked.
    pub dns_check: bool,
    /// Upper bound for a single resolution attempt, in milliseconds.
    pub dns_timeout_ms: u64,
    /// Additional resolution attempts after a failed one.
    pub dns_retries: usize,
    pub code_length: usize,
    /// Generate-and-insert rounds before a shorten request fails.
    pub code_max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            dns_check: true,
            dns_timeout_ms: 3000,
            dns_retries: 1,
            code_length: DEFAULT_CODE_LENGTH,
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults; range checks
    /// happen in [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let dns_check = env::var("DNS_CHECK")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(defaults.dns_check);

        let dns_timeout_ms = env::var("DNS_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.dns_timeout_ms);

        let dns_retries = env::var("DNS_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.dns_retries);

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_length);

        let code_max_attempts = env::var("CODE_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_max_attempts);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            dns_check,
            dns_timeout_ms,
            dns_retries,
            code_length,
            code_max_attempts,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:` + `PORT` environment variable
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a `host:port` socket address
    /// - a DNS or code generation setting is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.dns_timeout_ms == 0 || self.dns_timeout_ms > 60_000 {
            anyhow::bail!(
                "DNS_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.dns_timeout_ms
            );
        }

        if self.dns_retries > 5 {
            anyhow::bail!("DNS_RETRIES must be at most 5, got {}", self.dns_retries);
        }

        if !(8..=64).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 8 and 64, got {}",
                self.code_length
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 100 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        Ok(())
    }

    /// Resolution timeout as a [`Duration`].
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.dns_check {
            tracing::info!(
                "  DNS check: enabled (timeout {}ms, {} retries)",
                self.dns_timeout_ms,
                self.dns_retries
            );
        } else {
            tracing::info!("  DNS check: disabled");
        }

        tracing::info!(
            "  Codes: {} characters, {} attempts",
            self.code_length,
            self.code_max_attempts
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
