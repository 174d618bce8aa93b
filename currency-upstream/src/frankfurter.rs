//! Frankfurter API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use tracing::debug;

use currency_types::{ProviderError, RateProvider, ports::QueryParams};

use crate::retry::{RetryPolicy, with_retry};

/// Public Frankfurter endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);
/// Headroom on top of the worst-case retry sequence for connection setup.
const DEADLINE_SLACK: Duration = Duration::from_secs(1);

/// Error constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the Frankfurter exchange rate API.
///
/// Every `fetch` runs under the client's `RetryPolicy` and is bounded by an
/// overall deadline. Unless set explicitly, the deadline is long enough for
/// every attempt to hit its timeout and every backoff to elapse.
pub struct FrankfurterClient {
    base_url: String,
    http: Client,
    retry: RetryPolicy,
    deadline: Duration,
}

impl FrankfurterClient {
    /// Creates a client with the default retry policy and timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BuildError> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> FrankfurterClientBuilder {
        FrankfurterClientBuilder {
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            deadline: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Overall budget for one `fetch`, retries included.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    async fn get_once(&self, url: &str, query: QueryParams<'_>) -> Result<String, ProviderError> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl RateProvider for FrankfurterClient {
    async fn fetch(&self, path: &str, query: QueryParams<'_>) -> Result<String, ProviderError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, ?query, "Fetching from Frankfurter");

        let url = url.as_str();
        let attempts = with_retry(self.retry, move || self.get_once(url, query));

        match tokio::time::timeout(self.deadline, attempts).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.deadline)),
        }
    }
}

/// Builder for [`FrankfurterClient`].
pub struct FrankfurterClientBuilder {
    base_url: String,
    retry: RetryPolicy,
    attempt_timeout: Duration,
    deadline: Option<Duration>,
}

impl FrankfurterClientBuilder {
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Timeout for a single HTTP attempt.
    pub fn attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Budget for a whole `fetch`, retries and backoff included.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn build(self) -> Result<FrankfurterClient, BuildError> {
        let http = Client::builder().timeout(self.attempt_timeout).build()?;
        let deadline = self.deadline.unwrap_or_else(|| {
            self.retry
                .worst_case(self.attempt_timeout)
                .saturating_add(DEADLINE_SLACK)
        });

        Ok(FrankfurterClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            http,
            retry: self.retry,
            deadline,
        })
    }
}
