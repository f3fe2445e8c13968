//! HTTP client for the remote scholarly catalog
//!
//! Wraps the Semantic Scholar Graph API search endpoint. The remote
//! side rate-limits aggressively, so 429 responses are retried with an
//! exponential backoff; every other failure is surfaced immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::ScholarApiConfig;
use crate::error::{AppError, AppResult};
use crate::scholar::records::{PaperRecord, SearchResponse};

/// Fields requested for every search hit
const SEARCH_FIELDS: &str = "paperId,corpusId,title,abstract,year,authors.name,authors.authorId";

/// Source of raw paper records, implemented by the live API client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaperFetcher: Send + Sync {
    /// Run a relevance search on the remote catalog
    async fn search_papers(&self, query: &str, limit: u32) -> AppResult<Vec<PaperRecord>>;
}

/// Client for the remote catalog's REST API
#[derive(Debug, Clone)]
pub struct ScholarApiClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
    initial_delay: Duration,
    backoff_factor: f64,
}

impl ScholarApiClient {
    pub fn new(config: &ScholarApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries.max(1),
            initial_delay: Duration::from_secs_f64(config.initial_delay_secs),
            backoff_factor: config.backoff_factor,
        })
    }

    /// GET a JSON document, retrying on 429 with exponential backoff.
    ///
    /// At most `max_retries` attempts in total. Non-429 failures
    /// (transport errors, other HTTP statuses, bad JSON) are not retried.
    async fn get_json<T>(&self, url: &str, params: &[(&str, String)]) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut delay = self.initial_delay;

        for attempt in 1..=self.max_retries {
            tracing::debug!(
                url = %url,
                attempt,
                max_retries = self.max_retries,
                "Requesting remote catalog"
            );

            let response = self
                .http
                .get(url)
                .query(params)
                .send()
                .await
                .map_err(|e| AppError::RequestFailed(format!("Request failed: {}", e)))?;

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt == self.max_retries {
                    tracing::warn!(attempts = attempt, "Remote rate limit exhausted, giving up");
                    return Err(AppError::RateLimitExceeded { attempts: attempt });
                }
                tracing::warn!(
                    attempt,
                    retry_in_secs = delay.as_secs_f64(),
                    "Rate limited by remote catalog, backing off"
                );
                tokio::time::sleep(delay).await;
                delay = delay.mul_f64(self.backoff_factor);
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::RequestFailed(format!(
                    "Remote catalog returned {}: {}",
                    status, body
                )));
            }

            return response
                .json::<T>()
                .await
                .map_err(|e| AppError::RequestFailed(format!("Invalid response body: {}", e)));
        }

        Err(AppError::RateLimitExceeded {
            attempts: self.max_retries,
        })
    }
}

#[async_trait]
impl PaperFetcher for ScholarApiClient {
    async fn search_papers(&self, query: &str, limit: u32) -> AppResult<Vec<PaperRecord>> {
        let url = format!("{}/paper/search", self.base_url);
        let params = [
            ("query", query.to_string()),
            ("limit", limit.to_string()),
            ("fields", SEARCH_FIELDS.to_string()),
        ];

        let response: SearchResponse = self.get_json(&url, &params).await?;
        tracing::info!(
            query = %query,
            total = response.total,
            returned = response.data.len(),
            "Remote search completed"
        );
        Ok(response.data)
    }
}
