// JPS Lookup - Core Library
// Free-text entity lookups against the Japan Search SPARQL endpoint

pub mod category;
pub mod config;
pub mod error;
pub mod query;
pub mod result;
pub mod client;

// Re-export commonly used types
pub use category::Category;
pub use config::{LookupConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS, RESULT_LIMIT};
pub use error::{LookupError, Result};
pub use query::{
    build_query_uri, build_query_uri_for, build_sparql, escape_literal,
    person_lookup_uri, place_lookup_uri, organization_lookup_uri,
    title_lookup_uri, rs_lookup_uri,
};
pub use result::{normalize_response, NormalizedResult, REPOSITORY};
pub use client::JpsClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
