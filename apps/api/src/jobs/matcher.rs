//! Job matching pipeline.
//!
//! Flow: aggregate (all sources, dedup) → score against profile → rank → top N.
//! Nothing here is persisted; the caller owns whatever it does with the result.

use tracing::info;

use crate::jobs::aggregator::Aggregator;
use crate::jobs::embedding::EmbeddingError;
use crate::jobs::models::{JobListing, SearchQuery};
use crate::jobs::ranker::rank;
use crate::jobs::scorer::RelevanceScorer;

pub struct JobMatcher {
    aggregator: Aggregator,
    scorer: RelevanceScorer,
}

impl JobMatcher {
    pub fn new(aggregator: Aggregator, scorer: RelevanceScorer) -> Self {
        Self { aggregator, scorer }
    }

    pub async fn aggregate(&self, query: &SearchQuery) -> Vec<JobListing> {
        self.aggregator.aggregate(query).await
    }

    /// Scores and ranks already-aggregated listings.
    pub async fn score_and_rank(
        &self,
        profile_text: &str,
        listings: Vec<JobListing>,
        top_n: usize,
    ) -> Result<Vec<JobListing>, EmbeddingError> {
        let scored = self.scorer.score(profile_text, listings).await?;
        let ranked = rank(scored, top_n);
        info!("Returning {} ranked jobs", ranked.len());
        Ok(ranked)
    }
}
