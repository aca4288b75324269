// ⚠️ Lookup errors
// Every failure of a lookup ends up as one of these

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The endpoint did not answer within the configured timeout
    #[error("call to {endpoint} timed out after {}ms", .timeout.as_millis())]
    Timeout { endpoint: String, timeout: Duration },

    /// The endpoint answered with a non-success status
    #[error("something wrong with the call to the JPS endpoint, HTTP error: {status}")]
    Transport { status: u16 },

    /// The connection failed before a complete body arrived (DNS, connect, TLS, dropped body)
    #[error("network failure calling the JPS endpoint: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not UTF-8 JSON, or a binding lacked `s` / `label`
    #[error("unexpected response from the JPS endpoint: {0}")]
    Parse(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
