//! Job board client: the single point of contact with the job-creation endpoint.
//!
//! The form only sees the `JobBoard` trait; `HttpJobBoard` is the production backend.
//! No automatic retry: a failed post is retried by the user resubmitting.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::job::JobPayload;

pub const JOBS_PATH: &str = "/api/jobs";

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job board returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Somewhere a job posting can be created.
#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Creates the posting. `Ok` carries the response body, which callers only log.
    async fn post_job(&self, payload: &JobPayload) -> Result<Value, BoardError>;
}

/// `POST {base_url}/api/jobs` over HTTP.
#[derive(Clone)]
pub struct HttpJobBoard {
    client: Client,
    endpoint: String,
}

impl HttpJobBoard {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BoardError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), JOBS_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl JobBoard for HttpJobBoard {
    async fn post_job(&self, payload: &JobPayload) -> Result<Value, BoardError> {
        info!(endpoint = %self.endpoint, title = %payload.title, "Posting job");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Job board returned {}: {}", status, body);
            return Err(BoardError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // A 2xx without a JSON body is still a failed post.
        let created: Value = serde_json::from_str(&body)?;
        debug!("Job posted: {}", created);
        Ok(created)
    }
}
