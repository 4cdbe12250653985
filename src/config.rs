//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honored (loaded in `main.rs`).
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export UPSTREAM_TIMEOUT_SECS="5"
//! export PAIRED_JOKES_COUNT="5"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from proxy headers (default: `false`)
//! - `CHUCK_NORRIS_API_URL` - Chuck Norris endpoint (default: `https://api.chucknorris.io/jokes/random`)
//! - `DAD_JOKE_API_URL` - Dad joke endpoint (default: `https://icanhazdadjoke.com/`)
//! - `UPSTREAM_TIMEOUT_SECS` - Per-request upstream timeout (default: 5, range: 1-60)
//! - `PAIRED_JOKES_COUNT` - Pairs requested when `count` is omitted (default: 5)
//! - `MAX_PAIRED_JOKES_COUNT` - Largest accepted `count` (default: 20, max: 100)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

use crate::application::services::{
    DEFAULT_MAX_PAIRED_JOKES_COUNT, DEFAULT_PAIRED_JOKES_COUNT, PAIRED_JOKES_COUNT_CEILING,
};
use crate::infrastructure::sources::{ChuckNorrisClient, DEFAULT_UPSTREAM_TIMEOUT, DadJokeClient};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,

    // ── Upstream providers ──────────────────────────────────────────────────
    pub chuck_norris_url: String,
    pub dad_joke_url: String,
    /// Timeout applied to every single upstream request, in seconds.
    pub upstream_timeout_secs: u64,

    // ── Aggregation ─────────────────────────────────────────────────────────
    /// Pairs requested when the caller does not pass `count`.
    pub paired_jokes_count: usize,
    /// Upper bound for a caller-supplied `count`.
    pub max_paired_jokes_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            chuck_norris_url: ChuckNorrisClient::DEFAULT_URL.to_string(),
            dad_joke_url: DadJokeClient::DEFAULT_URL.to_string(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT.as_secs(),
            paired_jokes_count: DEFAULT_PAIRED_JOKES_COUNT,
            max_paired_jokes_count: DEFAULT_MAX_PAIRED_JOKES_COUNT,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let chuck_norris_url =
            env::var("CHUCK_NORRIS_API_URL").unwrap_or(defaults.chuck_norris_url);
        let dad_joke_url = env::var("DAD_JOKE_API_URL").unwrap_or(defaults.dad_joke_url);

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.upstream_timeout_secs);

        let paired_jokes_count = env::var("PAIRED_JOKES_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.paired_jokes_count);

        let max_paired_jokes_count = env::var("MAX_PAIRED_JOKES_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_paired_jokes_count);

        Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            chuck_norris_url,
            dad_joke_url,
            upstream_timeout_secs,
            paired_jokes_count,
            max_paired_jokes_count,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - an upstream URL is not a valid HTTP(S) URL
    /// - `upstream_timeout_secs` is outside 1-60
    /// - `max_paired_jokes_count` is outside 1-100
    /// - `paired_jokes_count` is 0 or exceeds `max_paired_jokes_count`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        self.listen_addr.parse::<SocketAddr>().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })?;

        self.chuck_norris_endpoint()?;
        self.dad_joke_endpoint()?;

        if !(1..=60).contains(&self.upstream_timeout_secs) {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECS must be between 1 and 60, got {}",
                self.upstream_timeout_secs
            );
        }

        if !(1..=PAIRED_JOKES_COUNT_CEILING).contains(&self.max_paired_jokes_count) {
            anyhow::bail!(
                "MAX_PAIRED_JOKES_COUNT must be between 1 and {}, got {}",
                PAIRED_JOKES_COUNT_CEILING,
                self.max_paired_jokes_count
            );
        }

        if self.paired_jokes_count == 0 || self.paired_jokes_count > self.max_paired_jokes_count {
            anyhow::bail!(
                "PAIRED_JOKES_COUNT must be between 1 and {}, got {}",
                self.max_paired_jokes_count,
                self.paired_jokes_count
            );
        }

        Ok(())
    }

    /// Parsed Chuck Norris endpoint.
    pub fn chuck_norris_endpoint(&self) -> Result<Url> {
        parse_http_url("CHUCK_NORRIS_API_URL", &self.chuck_norris_url)
    }

    /// Parsed dad joke endpoint.
    pub fn dad_joke_endpoint(&self) -> Result<Url> {
        parse_http_url("DAD_JOKE_API_URL", &self.dad_joke_url)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Chuck Norris API: {}", self.chuck_norris_url);
        tracing::info!("  Dad joke API: {}", self.dad_joke_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!(
            "  Paired jokes: {} (max {})",
            self.paired_jokes_count,
            self.max_paired_jokes_count
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_http_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must use http or https, got '{}'", url.scheme());
    }

    Ok(url)
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
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
