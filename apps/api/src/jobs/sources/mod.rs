//! Source adapters, one client per external job-listing provider.
//!
//! Each adapter maps its provider's response schema into `JobListing`.
//! Failures stay inside the adapter: `try_fetch` returns a `SourceError`,
//! and the provided `fetch` turns that into an empty result plus a log line.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::config::Config;
use crate::jobs::models::{JobListing, SearchQuery};

pub mod adzuna;
pub mod jsearch;

pub use adzuna::AdzunaSource;
pub use jsearch::JSearchSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{0} credentials are not configured")]
    MissingCredentials(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Provider name used in log lines.
    fn name(&self) -> &'static str;

    /// Single best-effort request to the provider. No retries.
    async fn try_fetch(&self, query: &SearchQuery) -> Result<Vec<JobListing>, SourceError>;

    /// Never fails: any provider error degrades to an empty result.
    async fn fetch(&self, query: &SearchQuery) -> Vec<JobListing> {
        match self.try_fetch(query).await {
            Ok(listings) => listings,
            Err(SourceError::MissingCredentials(provider)) => {
                warn!("{provider} credentials not configured, skipping {provider}");
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Error fetching jobs from {}: {e} (invalid credentials, rate limiting or network issues)",
                    self.name()
                );
                Vec::new()
            }
        }
    }
}

/// Builds the registered adapters in their fixed aggregation order:
/// Adzuna first, then JSearch.
pub fn build_sources(config: &Config, client: Client) -> Vec<Arc<dyn JobSource>> {
    vec![
        Arc::new(AdzunaSource::new(
            client.clone(),
            config.adzuna.clone(),
            config.adzuna_base_url.clone(),
            config.adzuna_country.clone(),
        )),
        Arc::new(JSearchSource::new(
            client,
            config.jsearch_api_key.clone(),
            config.jsearch_base_url.clone(),
        )),
    ]
}

/// Returns `value`, or `fallback` when the provider omitted the field.
/// A present but empty string is kept as-is.
pub(crate) fn or_sentinel(value: Option<String>, fallback: &str) -> String {
    value.unwrap_or_else(|| fallback.to_string())
}
