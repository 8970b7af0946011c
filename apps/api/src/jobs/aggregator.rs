//! Polls every source adapter and merges their listings.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::jobs::models::{JobListing, SearchQuery};
use crate::jobs::sources::JobSource;

pub struct Aggregator {
    sources: Vec<Arc<dyn JobSource>>,
}

impl Aggregator {
    pub fn new(sources: Vec<Arc<dyn JobSource>>) -> Self {
        Self { sources }
    }

    /// Fetches from all sources concurrently and concatenates in registration
    /// order (not completion order), then drops `(title, company)` duplicates.
    pub async fn aggregate(&self, query: &SearchQuery) -> Vec<JobListing> {
        let batches = join_all(self.sources.iter().map(|source| source.fetch(query))).await;

        let mut total = 0;
        for (source, batch) in self.sources.iter().zip(&batches) {
            info!("Found {} jobs from {}", batch.len(), source.name());
            total += batch.len();
        }

        let unique = dedup_listings(batches.into_iter().flatten());
        info!("Total unique jobs: {} (of {total} fetched)", unique.len());

        if unique.is_empty() {
            warn!(
                "No jobs found. Possible causes: missing API keys, rate limits, \
                 network issues, or no postings for the search criteria"
            );
        }

        unique
    }
}

/// Keeps the first listing per case-insensitive `(title, company)` pair,
/// preserving first-seen order.
///
/// Two distinct postings with the same title at the same company collapse
/// into one. Known coarse-dedup limitation; providers expose no shared ID.
pub fn dedup_listings(listings: impl IntoIterator<Item = JobListing>) -> Vec<JobListing> {
    let mut seen = HashSet::new();
    listings
        .into_iter()
        .filter(|job| seen.insert(job.dedup_key()))
        .collect()
}
