use std::cmp::Ordering;

use crate::jobs::models::JobListing;

/// Default result count for the search endpoint.
pub const DEFAULT_TOP_N: usize = 20;

/// Sorts by score descending and keeps the first `top_n`.
/// Unscored listings rank as 0.0. The sort is stable, so equal scores keep
/// their post-dedup order.
pub fn rank(mut listings: Vec<JobListing>, top_n: usize) -> Vec<JobListing> {
    listings.sort_by(|a, b| {
        let a = a.score.unwrap_or(0.0);
        let b = b.score.unwrap_or(0.0);
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    });
    listings.truncate(top_n);
    listings
}
