//! The HTTP seam used by [`DataClient`](crate::DataClient).
//!
//! A [`Transport`] performs one GET and hands back the raw status and body.
//! It never interprets the status; that is the client's job. Production code
//! uses [`ReqwestTransport`]; tests substitute a scripted implementation.

use async_trait::async_trait;
use url::Url;

/// Raw outcome of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure before a usable response was received.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, TLS, or body-read failure.
    #[error("transport failed: {0}")]
    Failed(String),
    /// The exchange was cancelled cooperatively.
    #[error("transport cancelled")]
    Cancelled,
}

/// Sends a GET request and returns the status and body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest::Client` with default settings.
///
/// No custom headers and no timeout override are applied.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::Failed(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Failed(format!("failed to read body: {}", e)))?;

        Ok(TransportResponse { status, body })
    }
}
