// ⚙️ Lookup configuration
// Endpoint + timeout, with defaults matching the public Japan Search service

use crate::error::{LookupError, Result};
use std::time::Duration;

/// Public Japan Search SPARQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://jpsearch.go.jp/rdf/sparql/";

/// How long a lookup waits before giving up
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Maximum rows requested per query
pub const RESULT_LIMIT: usize = 200;

pub const ENDPOINT_ENV: &str = "JPS_ENDPOINT";
pub const TIMEOUT_ENV: &str = "JPS_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl LookupConfig {
    pub fn new() -> Self {
        LookupConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Defaults overridden by `JPS_ENDPOINT` / `JPS_TIMEOUT_MS` when set
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LookupConfig::new();

        if let Some(endpoint) = get(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }

        if let Some(raw) = get(TIMEOUT_ENV) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                LookupError::Config(format!("{} must be milliseconds, got '{}'", TIMEOUT_ENV, raw))
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        config.validate()?;
        Ok(config)
    }

    /// Builder pattern: point at another SPARQL endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder pattern: change the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(LookupError::Config(format!(
                "endpoint must be an absolute http(s) URL, got '{}'",
                self.endpoint
            )));
        }

        if self.timeout.is_zero() {
            return Err(LookupError::Config("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}
