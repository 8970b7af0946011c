//! Axum route handlers for the Job Search API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::models::{JobListing, SearchQuery};
use crate::jobs::ranker::DEFAULT_TOP_N;
use crate::state::AppState;

const MAX_TOP_N: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub query: String,
    pub location: String,
    pub user_profile_text: String,
    /// Adzuna country (e.g. "gb", "us"). Defaults to ADZUNA_COUNTRY.
    pub country_code: Option<String>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub search_id: Uuid,
    pub searched_at: DateTime<Utc>,
    pub jobs: Vec<JobListing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/search (also /search-jobs and /match_jobs)
///
/// Fetches from every provider, scores against the profile text and returns
/// the top N. Zero aggregated listings is a 200 with a "No jobs found" message.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    payload: Result<Json<JobSearchRequest>, JsonRejection>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let Json(request) = payload?;

    let country_code = request
        .country_code
        .as_deref()
        .map(normalize_country_code)
        .transpose()?;

    let top_n = request.top_n.unwrap_or(DEFAULT_TOP_N);
    if top_n == 0 || top_n > MAX_TOP_N {
        return Err(AppError::Validation(format!(
            "top_n must be between 1 and {MAX_TOP_N}"
        )));
    }

    let search_id = Uuid::new_v4();
    let span = info_span!("job_search", %search_id);

    async move {
        info!(
            "Searching jobs: query='{}' location='{}'",
            request.query, request.location
        );

        let mut query = SearchQuery::new(request.query, request.location);
        query.country_code = country_code;

        let listings = state.matcher.aggregate(&query).await;
        if listings.is_empty() {
            return Ok(Json(JobSearchResponse {
                search_id,
                searched_at: Utc::now(),
                jobs: Vec::new(),
                message: Some("No jobs found".to_string()),
            }));
        }

        let jobs = state
            .matcher
            .score_and_rank(&request.user_profile_text, listings, top_n)
            .await
            .map_err(|e| AppError::Matching(e.to_string()))?;

        Ok(Json(JobSearchResponse {
            search_id,
            searched_at: Utc::now(),
            jobs,
            message: None,
        }))
    }
    .instrument(span)
    .await
}

/// Adzuna takes the country as a URL path segment, so only a bare
/// two-letter code is accepted.
fn normalize_country_code(raw: &str) -> Result<String, AppError> {
    let code = raw.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_lowercase())
    } else {
        Err(AppError::Validation(format!(
            "country_code must be a two-letter ISO-3166 code, got '{raw}'"
        )))
    }
}
