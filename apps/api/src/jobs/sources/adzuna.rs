//! Adzuna job search API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::AdzunaCredentials;
use crate::jobs::models::{JobListing, SearchQuery, NOT_AVAILABLE, NO_DESCRIPTION, NO_URL};
use crate::jobs::sources::{or_sentinel, JobSource, SourceError};

const RESULTS_PER_PAGE: u32 = 50;

#[derive(Debug, Default, Deserialize)]
pub struct AdzunaResponse {
    #[serde(default)]
    pub results: Vec<AdzunaJob>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdzunaJob {
    pub title: Option<String>,
    pub company: Option<AdzunaDisplayName>,
    pub location: Option<AdzunaDisplayName>,
    pub description: Option<String>,
    pub redirect_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdzunaDisplayName {
    pub display_name: Option<String>,
}

impl From<AdzunaJob> for JobListing {
    fn from(job: AdzunaJob) -> Self {
        JobListing {
            title: job.title.unwrap_or_default(),
            company: or_sentinel(job.company.and_then(|c| c.display_name), NOT_AVAILABLE),
            location: or_sentinel(job.location.and_then(|l| l.display_name), NOT_AVAILABLE),
            description: or_sentinel(job.description, NO_DESCRIPTION),
            url: or_sentinel(job.redirect_url, NO_URL),
            score: None,
        }
    }
}

pub struct AdzunaSource {
    client: Client,
    credentials: Option<AdzunaCredentials>,
    base_url: String,
    default_country: String,
}

impl AdzunaSource {
    pub fn new(
        client: Client,
        credentials: Option<AdzunaCredentials>,
        base_url: String,
        default_country: String,
    ) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_country,
        }
    }

    fn search_url(&self, country: &str) -> String {
        format!("{}/v1/api/jobs/{}/search/1", self.base_url, country)
    }
}

#[async_trait]
impl JobSource for AdzunaSource {
    fn name(&self) -> &'static str {
        "Adzuna"
    }

    async fn try_fetch(&self, query: &SearchQuery) -> Result<Vec<JobListing>, SourceError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SourceError::MissingCredentials("Adzuna"))?;

        let country = query
            .country_code
            .as_deref()
            .unwrap_or(&self.default_country)
            .to_lowercase();
        let results_per_page = RESULTS_PER_PAGE.to_string();

        let response: AdzunaResponse = self
            .client
            .get(self.search_url(&country))
            .query(&[
                ("app_id", credentials.app_id.as_str()),
                ("app_key", credentials.app_key.as_str()),
                ("results_per_page", results_per_page.as_str()),
                ("what", query.query.as_str()),
                ("where", query.location.as_str()),
                ("content-type", "application/json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Adzuna returned {} results", response.results.len());

        Ok(response.results.into_iter().map(JobListing::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Trimmed recording of a real /search/1 response.
    const FIXTURE: &str = r#"{
        "count": 2,
        "results": [
            {
                "title": "Python Developer",
                "company": {"display_name": "Acme Ltd"},
                "location": {"display_name": "London, UK"},
                "description": "Build APIs with FastAPI and PostgreSQL.",
                "redirect_url": "https://www.adzuna.co.uk/jobs/land/ad/1"
            },
            {
                "title": "Data Engineer",
                "company": {},
                "description": null
            }
        ]
    }"#;

    fn credentials() -> Option<AdzunaCredentials> {
        Some(AdzunaCredentials {
            app_id: "test-id".to_string(),
            app_key: "test-key".to_string(),
        })
    }

    fn source(base_url: String, credentials: Option<AdzunaCredentials>) -> AdzunaSource {
        AdzunaSource::new(Client::new(), credentials, base_url, "gb".to_string())
    }

    #[test]
    fn test_fixture_maps_complete_result() {
        let response: AdzunaResponse = serde_json::from_str(FIXTURE).unwrap();
        let listings: Vec<JobListing> = response.results.into_iter().map(JobListing::from).collect();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Python Developer");
        assert_eq!(listings[0].company, "Acme Ltd");
        assert_eq!(listings[0].location, "London, UK");
        assert_eq!(listings[0].url, "https://www.adzuna.co.uk/jobs/land/ad/1");
        assert!(listings[0].score.is_none());
    }

    #[test]
    fn test_fixture_fills_missing_fields_with_sentinels() {
        let response: AdzunaResponse = serde_json::from_str(FIXTURE).unwrap();
        let listing = JobListing::from(response.results.into_iter().nth(1).unwrap());

        assert_eq!(listing.title, "Data Engineer");
        assert_eq!(listing.company, NOT_AVAILABLE);
        assert_eq!(listing.location, NOT_AVAILABLE);
        assert_eq!(listing.description, NO_DESCRIPTION);
        assert_eq!(listing.url, NO_URL);
    }

    #[test]
    fn test_blank_fields_are_kept_verbatim() {
        let json = r#"{
            "title": "QA Engineer",
            "company": {"display_name": ""},
            "location": {"display_name": "Leeds"},
            "description": "",
            "redirect_url": "https://www.adzuna.co.uk/jobs/land/ad/3"
        }"#;
        let listing = JobListing::from(serde_json::from_str::<AdzunaJob>(json).unwrap());

        assert_eq!(listing.company, "");
        assert_eq!(listing.description, "");

        // An empty company must not collide with an absent one ("N/A").
        let absent_company = JobListing::from(AdzunaJob {
            title: Some("QA Engineer".to_string()),
            ..AdzunaJob::default()
        });
        assert_ne!(listing.dedup_key(), absent_company.dedup_key());
    }

    #[test]
    fn test_missing_title_becomes_empty_string() {
        let listing = JobListing::from(AdzunaJob::default());
        assert_eq!(listing.title, "");
    }

    #[tokio::test]
    async fn test_fetch_sends_credentials_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/api/jobs/us/search/1"))
            .and(query_param("app_id", "test-id"))
            .and(query_param("app_key", "test-key"))
            .and(query_param("what", "Python Developer"))
            .and(query_param("where", "Remote"))
            .and(query_param("results_per_page", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let mut query = SearchQuery::new("Python Developer", "Remote");
        query.country_code = Some("US".to_string());

        let listings = source(server.uri(), credentials()).fetch(&query).await;
        assert_eq!(listings.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_uses_default_country() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/api/jobs/gb/search/1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let listings = source(server.uri(), credentials())
            .fetch(&SearchQuery::new("rust", "London"))
            .await;
        assert_eq!(listings.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_credentials_returns_empty_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let adzuna = source(server.uri(), None);
        let err = adzuna
            .try_fetch(&SearchQuery::new("rust", "London"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::MissingCredentials("Adzuna")));
        assert!(adzuna.fetch(&SearchQuery::new("rust", "London")).await.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let adzuna = source(server.uri(), credentials());
        let query = SearchQuery::new("rust", "London");
        assert!(matches!(
            adzuna.try_fetch(&query).await,
            Err(SourceError::Http(_))
        ));
        assert!(adzuna.fetch(&query).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
            .mount(&server)
            .await;

        let listings = source(server.uri(), credentials())
            .fetch(&SearchQuery::new("rust", "London"))
            .await;
        assert!(listings.is_empty());
    }
}
