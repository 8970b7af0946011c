//! Relevance scoring via cosine similarity between a profile and each listing.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::jobs::embedding::{cosine_similarity, Embedder, EmbeddingError};
use crate::jobs::models::JobListing;

pub struct RelevanceScorer {
    embedder: Arc<dyn Embedder>,
    timeout: Duration,
}

impl RelevanceScorer {
    pub fn new(embedder: Arc<dyn Embedder>, timeout: Duration) -> Self {
        Self { embedder, timeout }
    }

    /// Attaches a similarity score (rounded to 4 decimals) to every listing.
    ///
    /// An empty profile or an empty listing set skips scoring and returns an
    /// empty vec. Embedding failures propagate; there is no degraded mode.
    pub async fn score(
        &self,
        profile_text: &str,
        listings: Vec<JobListing>,
    ) -> Result<Vec<JobListing>, EmbeddingError> {
        if listings.is_empty() || profile_text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let profile = self.bounded(self.embedder.embed(profile_text)).await?;

        let descriptions: Vec<String> = listings.iter().map(|j| j.description.clone()).collect();
        let vectors = self.bounded(self.embedder.embed_batch(&descriptions)).await?;

        if vectors.len() != listings.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: listings.len(),
                actual: vectors.len(),
            });
        }

        debug!("Scored {} listings", listings.len());

        Ok(listings
            .into_iter()
            .zip(vectors)
            .map(|(mut job, vector)| {
                job.score = Some(round4(cosine_similarity(&profile, &vector)));
                job
            })
            .collect())
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, EmbeddingError>>,
    ) -> Result<T, EmbeddingError> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| EmbeddingError::Timeout(self.timeout.as_secs()))?
    }
}

/// Rounds to 4 decimal places so float noise cannot reorder equal scores.
fn round4(value: f32) -> f64 {
    (f64::from(value) * 10_000.0).round() / 10_000.0
}
