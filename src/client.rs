// 🌐 JPS Client - Fetch-and-Normalize
// One GET per lookup, raced against a timeout

use crate::category::Category;
use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::query::build_query_uri_for;
use crate::result::{normalize_response, NormalizedResult};
use reqwest::Client;
use tracing::{debug, warn};

/// Lookup client for the Japan Search SPARQL endpoint
///
/// Holds only immutable config and a `reqwest::Client`, so it can be cloned
/// and shared across tasks freely.
#[derive(Debug, Clone)]
pub struct JpsClient {
    http: Client,
    config: LookupConfig,
}

impl JpsClient {
    /// Client against the public endpoint with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_config(LookupConfig::default())
    }

    pub fn with_config(config: LookupConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| LookupError::Config(format!("failed to create HTTP client: {}", e)))?;

        Self::with_http_client(http, config)
    }

    /// Use a caller-built `reqwest::Client` (headers, proxy, TLS settings pass through untouched)
    pub fn with_http_client(http: Client, config: LookupConfig) -> Result<Self> {
        config.validate()?;
        Ok(JpsClient { http, config })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Request URI for a lookup against this client's endpoint
    pub fn query_uri(&self, category: Category, query_string: &str) -> String {
        build_query_uri_for(&self.config.endpoint, category, query_string)
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    /// Search one category and return normalized results in endpoint order
    pub async fn lookup(
        &self,
        category: Category,
        query_string: &str,
    ) -> Result<Vec<NormalizedResult>> {
        if query_string.trim().is_empty() {
            return Err(LookupError::InvalidQuery("search text is empty".to_string()));
        }

        let uri = self.query_uri(category, query_string);
        debug!(category = %category, query = query_string, uri = %uri, "JPS lookup");

        let body = self.fetch_with_timeout(&uri).await?;
        let results = normalize_response(&body, category, query_string)?;

        debug!(category = %category, count = results.len(), "JPS lookup complete");
        Ok(results)
    }

    pub async fn find_person(&self, query_string: &str) -> Result<Vec<NormalizedResult>> {
        self.lookup(Category::Person, query_string).await
    }

    pub async fn find_place(&self, query_string: &str) -> Result<Vec<NormalizedResult>> {
        self.lookup(Category::Place, query_string).await
    }

    pub async fn find_organization(&self, query_string: &str) -> Result<Vec<NormalizedResult>> {
        self.lookup(Category::Organization, query_string).await
    }

    pub async fn find_title(&self, query_string: &str) -> Result<Vec<NormalizedResult>> {
        self.lookup(Category::Title, query_string).await
    }

    pub async fn find_rs(&self, query_string: &str) -> Result<Vec<NormalizedResult>> {
        self.lookup(Category::FreeformSubject, query_string).await
    }

    // ========================================================================
    // TRANSPORT
    // ========================================================================

    /// GET `uri` and return the raw body, or fail once the timeout elapses
    ///
    /// Losing the race drops the request future, which closes the connection.
    pub async fn fetch_with_timeout(&self, uri: &str) -> Result<Vec<u8>> {
        match tokio::time::timeout(self.config.timeout, self.fetch(uri)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    endpoint = %self.config.endpoint,
                    timeout = ?self.config.timeout,
                    "JPS call timed out"
                );
                Err(LookupError::Timeout {
                    endpoint: self.config.endpoint.clone(),
                    timeout: self.config.timeout,
                })
            }
        }
    }

    async fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        let response = self.http.get(uri).send().await.map_err(|e| {
            warn!(error = %e, "JPS call failed before a response arrived");
            LookupError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "JPS endpoint returned an error status");
            return Err(LookupError::Transport {
                status: status.as_u16(),
            });
        }

        // raw bytes, so invalid UTF-8 surfaces as a Parse error
        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "JPS response body could not be read");
            LookupError::Network(e)
        })?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = LookupConfig::new().with_endpoint("http://localhost:8890/sparql");
        let client = JpsClient::with_config(config).unwrap();

        let uri = client.query_uri(Category::Place, "葛飾");
        assert!(uri.starts_with("http://localhost:8890/sparql?output=json&query="));
    }

    #[test]
    fn test_default_client_targets_public_endpoint() {
        let client = JpsClient::new().unwrap();

        assert_eq!(client.config(), &LookupConfig::default());
        assert!(client
            .query_uri(Category::Title, "北斎")
            .starts_with("https://jpsearch.go.jp/rdf/sparql/?output=json&query="));
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = LookupConfig::new().with_timeout(Duration::ZERO);
        assert!(matches!(
            JpsClient::with_config(config),
            Err(LookupError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_query_rejected_without_network() {
        // unroutable endpoint: a network attempt would not come back as InvalidQuery
        let config = LookupConfig::new().with_endpoint("http://192.0.2.1/sparql");
        let client = JpsClient::with_config(config).unwrap();

        let err = client.find_place("   ").await.unwrap_err();
        assert!(matches!(err, LookupError::InvalidQuery(_)));
    }
}
