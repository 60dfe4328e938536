//! HTTP client for the Data USA population API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{DataQuery, Query},
    transport::{ReqwestTransport, Transport, TransportError},
    types::{Dataset, NationDataset, NationRecord, StateDataset, StateRecord},
    Error,
};

/// Production endpoint for all queries.
pub const DEFAULT_BASE_URL: &str = "https://datausa.io/api/data";

/// HTTP client for the Data USA `/api/data` endpoint.
///
/// Each fetch is a single GET with no retry, no caching and no shared
/// mutable state, so one client can serve concurrent callers. Only status
/// 200 is accepted.
#[derive(Clone)]
pub struct DataClient {
    /// Endpoint URL without a query string. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    transport: Arc<dyn Transport>,
}

impl Default for DataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataClient")
            .field("base_api_url", &self.base_api_url)
            .finish_non_exhaustive()
    }
}

impl DataClient {
    /// Creates a client pointing at the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client that sends every request through `transport`.
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            transport,
        }
    }

    /// Endpoint URL every query is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Builds the full request URL for `query`.
    pub fn request_url(&self, query: &DataQuery) -> Result<Url, Error> {
        let url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::debug!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::Request(format!("invalid base URL: {}", e))
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches and decodes any `/api/data` query.
    pub async fn fetch<T>(&self, query: &DataQuery) -> Result<Dataset<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.request_url(query)?;
        tracing::debug!("GET {}", url);

        let resp = self.transport.get(&url).await.map_err(|e| match e {
            TransportError::Cancelled => {
                tracing::debug!("Request to {} cancelled", url);
                Error::Cancelled
            }
            TransportError::Failed(reason) => {
                tracing::debug!("Request to {} failed: {}", url, reason);
                Error::Request(reason)
            }
        })?;

        if resp.status != 200 {
            let snippet = truncate_body(&resp.body);
            tracing::debug!("Unexpected status {} from {}: {}", resp.status, url, snippet);
            return Err(Error::InvalidResponse {
                status: resp.status,
                detail: snippet,
            });
        }

        serde_json::from_str::<Dataset<T>>(&resp.body).map_err(|e| {
            tracing::debug!("Failed to decode {} | body: {}", e, truncate_body(&resp.body));
            Error::InvalidResponse {
                status: resp.status,
                detail: e.to_string(),
            }
        })
    }

    /// Fetches the latest population of every U.S. state.
    pub async fn fetch_state_data(&self) -> Result<StateDataset, Error> {
        self.fetch::<StateRecord>(&DataQuery::states()).await
    }

    /// Fetches the national population for every available year.
    pub async fn fetch_nation_data(&self) -> Result<NationDataset, Error> {
        self.fetch::<NationRecord>(&DataQuery::nations()).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
