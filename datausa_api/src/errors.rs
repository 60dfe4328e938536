//! Error types for the API client.

/// Errors that can occur when fetching a dataset.
///
/// Every variant is terminal for the call that produced it: no partial
/// dataset is ever returned alongside an error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be built or sent (bad URL, connection failure).
    #[error("Invalid request: {0}")]
    Request(String),
    /// A response arrived but is unusable: a status other than 200, or a
    /// 200 whose body does not decode into the expected shape.
    #[error("Got an invalid response from the server (status {status})")]
    InvalidResponse { status: u16, detail: String },
    /// The fetch was cancelled before it completed.
    #[error("Request was cancelled")]
    Cancelled,
}

impl Error {
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    pub fn is_invalid_response(&self) -> bool {
        matches!(self, Self::InvalidResponse { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
