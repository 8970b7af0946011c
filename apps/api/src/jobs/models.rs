use serde::{Deserialize, Serialize};

/// Placeholder for provider fields that are absent from a response.
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_URL: &str = "#";

/// One external job posting, normalized across providers.
///
/// `title` and `company` are always present (possibly empty) and together
/// form the dedup key. `score` stays `None` until the relevance scorer runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl JobListing {
    /// Case-insensitive `(title, company)` identifier used for dedup.
    pub fn dedup_key(&self) -> (String, String) {
        (self.title.to_lowercase(), self.company.to_lowercase())
    }
}

/// Search parameters handed to every source adapter.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub location: String,
    /// Adzuna-only. Falls back to the configured default country.
    pub country_code: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: location.into(),
            country_code: None,
        }
    }
}

#[cfg(test)]
pub(crate) fn listing(title: &str, company: &str) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        location: NOT_AVAILABLE.to_string(),
        description: format!("{title} at {company}"),
        url: NO_URL.to_string(),
        score: None,
    }
}
