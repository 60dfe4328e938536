//! Library layer for the population viewer: loading policy and view models.
//!
//! Wraps the `datausa_api` client with cancellable, independent loading of
//! the state and nation datasets, and maps records into table rows and a
//! chart series.

pub mod chart;
pub mod error;
pub mod loader;
pub mod table;
pub mod validation;

pub use datausa_api;
pub use datausa_api::types;
pub use datausa_api::{DataClient, DEFAULT_BASE_URL};

pub use chart::{ChartPoint, ChartSeries};
pub use error::PopulationError;
pub use loader::{OverviewReport, PopulationLoader, Snapshot};
pub use table::{SortColumn, SortOrder, SortSpec, TableItem};
pub use tokio_util::sync::CancellationToken;
