//! Client for the Data USA population API.
//!
//! [`DataClient`] issues one GET per call against `https://datausa.io/api/data`,
//! checks for status 200, and decodes the `data` array into typed records.
//! The HTTP layer sits behind the [`Transport`] trait so it can be replaced
//! in tests.

mod client;
mod errors;
mod query;
pub mod transport;
pub mod types;
pub use self::client::{DataClient, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{DataQuery, Drilldown, Measure, Query, YearFilter};
pub use self::transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
