//! HTTP client trait and implementations.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::FetchError;

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch a JSON document from a URL.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Production HTTP client backed by reqwest.
pub struct ApiHttpClient {
    inner: reqwest::Client,
}

impl ApiHttpClient {
    /// Create a new client with a 30 second request timeout.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpClient for ApiHttpClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url, "network: fetching");
        let response = self.inner.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = %status, "network: request failed");
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::InvalidJson(e.to_string()))
    }
}

/// Mock response for testing.
#[derive(Clone)]
pub enum MockResponse {
    Json(Value),
    Status(u16),
    Error(String),
}

/// Mock HTTP client for testing, keyed by exact URL.
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add a JSON body response for a URL.
    pub fn with_json(self, url: &str, body: Value) -> Self {
        self.with_response(url, MockResponse::Json(body))
    }

    /// Add a non-2xx status response for a URL.
    pub fn with_status(self, url: &str, code: u16) -> Self {
        self.with_response(url, MockResponse::Status(code))
    }

    /// Add a transport error response for a URL.
    pub fn with_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        match self.responses.get(url) {
            Some(MockResponse::Json(body)) => Ok(body.clone()),
            Some(MockResponse::Status(code)) => Err(FetchError::Status { code: *code }),
            Some(MockResponse::Error(e)) => Err(FetchError::InvalidUrl(e.clone())),
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
