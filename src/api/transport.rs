//! Generic HTTP transport underneath the engagement API.
//!
//! The rest of the crate only sees [`HttpTransport`]: GET/POST/PUT of JSON
//! bodies, each resolving to an [`Envelope`] whose `result` payload may be
//! absent. [`RestTransport`] is the production implementation over
//! [`reqwest`]. One attempt per call, no retries.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Response wrapper used by every endpoint. `result` can always be omitted
/// by the server; callers decide what an absent payload means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// Failures raised by a transport implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request itself failed (connect, DNS, TLS, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// A bare message string surfaced by the server or a test transport.
    #[error("{0}")]
    Message(String),

    /// A resolved payload that does not match the expected shape.
    #[error("malformed response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Generic request client the data-access layer is written against.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Envelope, TransportError>;
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<Envelope, TransportError>;
    async fn put(&self, path: &str, body: serde_json::Value) -> Result<Envelope, TransportError>;
}

/// JSON-over-HTTP transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct RestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl RestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reuse an existing client, useful for connection pooling across APIs.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn read_envelope(response: reqwest::Response) -> Result<Envelope, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<Envelope>().await?)
    }
}

#[async_trait]
impl HttpTransport for RestTransport {
    async fn get(&self, path: &str) -> Result<Envelope, TransportError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::read_envelope(response).await
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<Envelope, TransportError> {
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        Self::read_envelope(response).await
    }

    async fn put(&self, path: &str, body: serde_json::Value) -> Result<Envelope, TransportError> {
        let response = self.client.put(self.url(path)).json(&body).send().await?;
        Self::read_envelope(response).await
    }
}
