//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;

const DEFAULT_UPSTREAM_URL: &str = "https://scrape.pastebin.com";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Paste cache TTL in seconds
    pub cache_ttl: u64,
    /// Stale entry sweep interval in seconds, 0 disables the sweeper
    pub cleanup_interval: u64,
    /// Base URL of the paste scraping API
    pub upstream_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// Number of rows requested from the listing endpoint
    pub list_limit: u32,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Interpreter commands for the code runner
    pub go_bin: String,
    pub python_bin: String,
    pub ruby_bin: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_TTL` - Paste cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds, 0 = off (default: 600)
    /// - `UPSTREAM_URL` - Scraping API base URL (default: https://scrape.pastebin.com)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 10)
    /// - `LIST_LIMIT` - Pastes requested per listing (default: 250)
    /// - `STATIC_DIR` - Static asset directory (default: static)
    /// - `GO_BIN`, `PYTHON_BIN`, `RUBY_BIN` - Interpreters (default: go, python3, ruby)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parsed_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parsed_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            upstream_url: env::var("UPSTREAM_URL").unwrap_or(defaults.upstream_url),
            upstream_timeout: parsed_var("UPSTREAM_TIMEOUT").unwrap_or(defaults.upstream_timeout),
            list_limit: parsed_var("LIST_LIMIT").unwrap_or(defaults.list_limit),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            go_bin: env::var("GO_BIN").unwrap_or(defaults.go_bin),
            python_bin: env::var("PYTHON_BIN").unwrap_or(defaults.python_bin),
            ruby_bin: env::var("RUBY_BIN").unwrap_or(defaults.ruby_bin),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cache_ttl: DEFAULT_TTL_SECS,
            cleanup_interval: 600,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout: 10,
            list_limit: 250,
            static_dir: "static".to_string(),
            go_bin: "go".to_string(),
            python_bin: "python3".to_string(),
            ruby_bin: "ruby".to_string(),
        }
    }
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
