//! Bounded-time JSON GET.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Deadline for a whole request, from send to the last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Single-attempt HTTP client for JSON endpoints.
///
/// Connections are not kept idle between calls, so each request owns its own
/// connection and its own deadline.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client with the default 8 second deadline.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom deadline.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self { client, timeout })
    }

    /// The request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// Any 2xx status succeeds; an empty body reads as `{}`. When the deadline
    /// passes the request is dropped, which aborts the connection.
    pub async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let result = match tokio::time::timeout(self.timeout, self.try_get_json(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        };

        match &result {
            Ok(_) => debug!(url, "fetched JSON"),
            Err(e) => warn!(url, error = %e, "JSON fetch failed"),
        }
        result
    }

    async fn try_get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        if body.is_empty() {
            return Ok(Value::Object(Default::default()));
        }

        serde_json::from_str(&body).map_err(FetchError::Parse)
    }
}
