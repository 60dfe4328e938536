//! Cancellable loading of the state and nation datasets.
//!
//! The two fetches are independent: [`PopulationLoader::load_all`] runs them
//! concurrently and reports each outcome separately, so a failed state
//! request never hides nation data that loaded fine.

use std::future::Future;

use datausa_api::types::{NationDataset, StateDataset};
use datausa_api::DataClient;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::chart::ChartSeries;
use crate::error::PopulationError;
use crate::table::{self, SortSpec, TableItem};

/// Outcome of loading both datasets.
#[derive(Debug)]
pub struct Snapshot {
    pub states: Result<StateDataset, PopulationError>,
    pub nations: Result<NationDataset, PopulationError>,
}

impl Snapshot {
    /// Both datasets loaded.
    pub fn is_complete(&self) -> bool {
        self.states.is_ok() && self.nations.is_ok()
    }

    /// Neither dataset loaded.
    pub fn is_total_failure(&self) -> bool {
        self.states.is_err() && self.nations.is_err()
    }

    /// Combines both outcomes into one document, states sorted by `spec`.
    pub fn report(&self, spec: SortSpec) -> OverviewReport {
        let (states, state_error) = match &self.states {
            Ok(states) => {
                let mut items = table::table_items(states);
                table::sort_items(&mut items, spec);
                (Some(items), None)
            }
            Err(e) => (None, Some(e.to_string())),
        };
        let (nations, nation_error) = match &self.nations {
            Ok(nations) => (Some(ChartSeries::from_records(nations)), None),
            Err(e) => (None, Some(e.to_string())),
        };
        OverviewReport {
            states,
            nations,
            state_error,
            nation_error,
        }
    }
}

/// Both datasets as a single serializable document. A dataset that failed
/// to load is `None` and its error message is set instead.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverviewReport {
    pub states: Option<Vec<TableItem>>,
    pub nations: Option<ChartSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nation_error: Option<String>,
}

impl OverviewReport {
    pub fn to_json(&self) -> Result<String, PopulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Loads population datasets through a [`DataClient`].
#[derive(Clone, Debug)]
pub struct PopulationLoader {
    client: DataClient,
}

impl PopulationLoader {
    pub fn new(client: DataClient) -> Self {
        Self { client }
    }

    pub async fn load_states(
        &self,
        cancel: &CancellationToken,
    ) -> Result<StateDataset, PopulationError> {
        cancellable(cancel, self.client.fetch_state_data()).await
    }

    pub async fn load_nations(
        &self,
        cancel: &CancellationToken,
    ) -> Result<NationDataset, PopulationError> {
        cancellable(cancel, self.client.fetch_nation_data()).await
    }

    /// Fetches both datasets concurrently. Failures are logged and kept
    /// per dataset.
    pub async fn load_all(&self, cancel: &CancellationToken) -> Snapshot {
        let (states, nations) = tokio::join!(self.load_states(cancel), self.load_nations(cancel));

        if let Err(ref e) = states {
            tracing::warn!("State population unavailable: {}", e);
        }
        if let Err(ref e) = nations {
            tracing::warn!("Nation population unavailable: {}", e);
        }

        Snapshot { states, nations }
    }
}

/// Races `fut` against `cancel`. A fired token drops the in-flight request.
async fn cancellable<T, F>(cancel: &CancellationToken, fut: F) -> Result<T, PopulationError>
where
    F: Future<Output = Result<T, datausa_api::Error>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(datausa_api::Error::Cancelled.into()),
        res = fut => res.map_err(PopulationError::from),
    }
}
