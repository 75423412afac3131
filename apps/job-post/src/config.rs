use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_JOBS_API_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_api_url: String,
    pub request_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let jobs_api_url = lookup("JOBS_API_URL")
            .unwrap_or_else(|| DEFAULT_JOBS_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("JOBS_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("JOBS_API_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("JOBS_API_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            jobs_api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
