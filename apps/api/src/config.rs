use std::time::Duration;

use anyhow::{Context, Result};

/// Adzuna application credentials. Both halves are required.
#[derive(Debug, Clone)]
pub struct AdzunaCredentials {
    pub app_id: String,
    pub app_key: String,
}

/// Application configuration loaded from environment variables.
/// Provider credentials are optional: a missing credential disables that
/// provider at request time instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub adzuna: Option<AdzunaCredentials>,
    pub adzuna_country: String,
    pub adzuna_base_url: String,
    pub jsearch_api_key: Option<String>,
    pub jsearch_base_url: String,
    pub http_timeout: Duration,
    pub embedding_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let adzuna = match (optional_env("ADZUNA_APP_ID"), optional_env("ADZUNA_API_KEY")) {
            (Some(app_id), Some(app_key)) => Some(AdzunaCredentials { app_id, app_key }),
            _ => None,
        };

        Ok(Config {
            adzuna,
            adzuna_country: optional_env("ADZUNA_COUNTRY").unwrap_or_else(|| "gb".to_string()),
            adzuna_base_url: optional_env("ADZUNA_BASE_URL")
                .unwrap_or_else(|| "https://api.adzuna.com".to_string()),
            jsearch_api_key: optional_env("JSEARCH_API_KEY"),
            jsearch_base_url: optional_env("JSEARCH_BASE_URL")
                .unwrap_or_else(|| "https://jsearch.p.rapidapi.com".to_string()),
            http_timeout: secs_env("HTTP_TIMEOUT_SECS", 10)?,
            embedding_timeout: secs_env("EMBEDDING_TIMEOUT_SECS", 10)?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating empty or whitespace-only values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn secs_env(key: &str, default: u64) -> Result<Duration> {
    let secs = match optional_env(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of seconds"))?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_timeout_uses_default() {
        let timeout = secs_env("JOBMATCH_TEST_UNSET_TIMEOUT_SECS", 10).unwrap();
        assert_eq!(timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_non_numeric_timeout_is_rejected() {
        std::env::set_var("JOBMATCH_TEST_BAD_TIMEOUT_SECS", "ten");
        assert!(secs_env("JOBMATCH_TEST_BAD_TIMEOUT_SECS", 10).is_err());
    }

    #[test]
    fn test_blank_env_is_treated_as_unset() {
        std::env::set_var("JOBMATCH_TEST_BLANK_KEY", "   ");
        assert_eq!(optional_env("JOBMATCH_TEST_BLANK_KEY"), None);
    }
}
