//! JSearch (RapidAPI) job search client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::jobs::models::{JobListing, SearchQuery, NOT_AVAILABLE, NO_DESCRIPTION, NO_URL};
use crate::jobs::sources::{or_sentinel, JobSource, SourceError};

const RAPIDAPI_HOST: &str = "jsearch.p.rapidapi.com";
const NUM_PAGES: &str = "1";

#[derive(Debug, Default, Deserialize)]
pub struct JSearchResponse {
    #[serde(default)]
    pub data: Vec<JSearchJob>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JSearchJob {
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub job_city: Option<String>,
    pub job_country: Option<String>,
    pub job_description: Option<String>,
    pub job_apply_link: Option<String>,
}

impl From<JSearchJob> for JobListing {
    fn from(job: JSearchJob) -> Self {
        let city = or_sentinel(job.job_city, NOT_AVAILABLE);
        let country = or_sentinel(job.job_country, NOT_AVAILABLE);
        JobListing {
            title: job.job_title.unwrap_or_default(),
            company: or_sentinel(job.employer_name, NOT_AVAILABLE),
            location: format!("{city}, {country}"),
            description: or_sentinel(job.job_description, NO_DESCRIPTION),
            url: or_sentinel(job.job_apply_link, NO_URL),
            score: None,
        }
    }
}

pub struct JSearchSource {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl JSearchSource {
    pub fn new(client: Client, api_key: Option<String>, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl JobSource for JSearchSource {
    fn name(&self) -> &'static str {
        "JSearch"
    }

    async fn try_fetch(&self, query: &SearchQuery) -> Result<Vec<JobListing>, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredentials("JSearch"))?;

        // JSearch takes a single free-text query; location is folded into it.
        let search = format!("{} in {}", query.query, query.location);

        let response: JSearchResponse = self
            .client
            .get(format!("{}/search", self.base_url))
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(&[("query", search.as_str()), ("num_pages", NUM_PAGES)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("JSearch returned {} results", response.data.len());

        Ok(response.data.into_iter().map(JobListing::from).collect())
    }
}
