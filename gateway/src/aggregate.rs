//! worker ステータスの集約
//!
//! 設定順に1件ずつ `GET {base}/status` を発行し、成功・失敗を問わず
//! エンドポイントごとに1エントリを返す。並列化・リトライは行わない。

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Path appended to each configured base URL
pub const STATUS_PATH: &str = "/status";

/// Failure of a single downstream `/status` call
///
/// The `Display` text becomes the `error` field of the entry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response within the per-call timeout
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Host unreachable, connection refused, DNS failure
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// Downstream answered with a 4xx/5xx status
    #[error("{status} for url: {url}")]
    Status {
        /// Status returned by the worker
        status: StatusCode,
        /// URL that was queried
        url: String,
    },

    /// Body was not valid JSON
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other transport or request-building failure (e.g. malformed URL)
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else {
            FetchError::Request(err)
        }
    }
}

/// One result per configured endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AggregateEntry {
    /// Worker answered with a JSON body
    Success {
        /// Fully-qualified URL that was queried (`{base}/status`)
        url: String,
        /// Decoded worker response
        response: Value,
    },
    /// Worker could not be queried
    Error {
        /// Configured base URL, without the status path
        url: String,
        /// Human-readable failure description
        error: String,
    },
}

impl AggregateEntry {
    /// Whether this entry records a successful call
    pub fn is_success(&self) -> bool {
        matches!(self, AggregateEntry::Success { .. })
    }
}

/// `GET /aggregate` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResponse {
    /// Entries in configured endpoint order
    pub aggregated: Vec<AggregateEntry>,
}

/// Sequential fan-out over the configured worker endpoints
#[derive(Debug, Clone)]
pub struct StatusAggregator {
    client: Client,
    endpoints: Arc<[String]>,
}

impl StatusAggregator {
    /// Build an aggregator whose HTTP client enforces `timeout` on every call.
    pub fn new(endpoints: Vec<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoints))
    }

    /// Build an aggregator around an existing client
    pub fn with_client(client: Client, endpoints: Vec<String>) -> Self {
        Self {
            client,
            endpoints: endpoints.into(),
        }
    }

    /// Configured base URLs
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Query every endpoint in order and collect one entry each.
    pub async fn aggregate(&self) -> AggregateResponse {
        let mut aggregated = Vec::with_capacity(self.endpoints.len());

        for base in self.endpoints.iter() {
            aggregated.push(self.query(base).await);
        }

        let failures = aggregated.iter().filter(|e| !e.is_success()).count();
        info!(
            endpoints = aggregated.len(),
            failures, "Aggregated worker statuses"
        );

        AggregateResponse { aggregated }
    }

    async fn query(&self, base: &str) -> AggregateEntry {
        let url = status_url(base);
        match self.fetch_status(&url).await {
            Ok(response) => {
                debug!(url = %url, "Worker status fetched");
                AggregateEntry::Success { url, response }
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Worker status request failed");
                AggregateEntry::Error {
                    url: base.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// 4xx/5xx statuses are rejected; any other status is accepted as long as
    /// the body decodes.
    pub async fn fetch_status(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// `{base}/status`, with no normalisation of `base`
pub fn status_url(base: &str) -> String {
    format!("{}{}", base, STATUS_PATH)
}
