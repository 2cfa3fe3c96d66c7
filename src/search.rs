use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::types::RapidApiResponse;

/// Host identifier the search API expects alongside the key.
const API_HOST: &str = "google-search3.p.rapidapi.com";

/// Deadline for a single keyword query, independent of how long the whole
/// batch has been running.
pub const KEYWORD_TIMEOUT: Duration = Duration::from_secs(30);

/// Classified outcome of one keyword query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Transport-level failure, including a query that outlived its deadline.
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// HTTP 429. Terminal for the whole batch.
    #[error("search api rate limit exceeded")]
    RateLimited,

    /// Any other non-200 status, with the raw body captured for diagnostics.
    #[error("search api returned status {status}")]
    Status { status: StatusCode, body: String },

    /// A 200 whose body does not decode as the expected result shape.
    #[error("failed to decode search api response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Locale/pagination parameters shared by every keyword of a batch,
/// forwarded to the API verbatim (empty values included, no defaulting).
#[derive(Clone, Debug, Default)]
pub struct QueryParams {
    pub lr: String,
    pub cr: String,
    pub num: String,
}

#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(http: reqwest::Client, endpoint: Url, api_key: String) -> Self {
        Self {
            http,
            endpoint,
            api_key,
            timeout: KEYWORD_TIMEOUT,
        }
    }

    /// Overrides the per-query deadline. Tests use this to trip the timeout
    /// path without waiting out the production value.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs one keyword against the search API and classifies the response.
    /// On success the links come back in API response order.
    pub async fn query(
        &self,
        keyword: &str,
        params: &QueryParams,
    ) -> Result<Vec<String>, QueryError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("q", keyword),
                ("lr", params.lr.as_str()),
                ("cr", params.cr.as_str()),
                ("num", params.num.as_str()),
            ])
            .header("X-RapidAPI-Host", API_HOST)
            .header("X-RapidAPI-Key", &self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(QueryError::Network)?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(QueryError::RateLimited),
            StatusCode::OK => {
                let body: RapidApiResponse =
                    response.json().await.map_err(QueryError::Decode)?;
                Ok(body.results.into_iter().map(|r| r.link).collect())
            }
            status => {
                // Dump the body for operator inspection; losing it must not
                // fail the keyword any harder than the status already did.
                let body = response.text().await.unwrap_or_default();
                warn!(%keyword, %status, body = %body, "search api returned non-ok status");
                Err(QueryError::Status { status, body })
            }
        }
    }
}
