//! State-level population rows.

use serde::{Deserialize, Serialize};

use super::PopulationRecord;

/// Data USA state identifier (e.g. "04000US02").
pub type StateID = String;

/// Population of one U.S. state for one year.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    #[serde(rename = "ID State")]
    pub state_id: StateID,

    #[serde(rename = "State")]
    pub state_name: String,

    #[serde(rename = "ID Year")]
    pub year_id: i64,

    #[serde(rename = "Year")]
    pub year_label: String,

    #[serde(rename = "Population")]
    pub population: i64,

    #[serde(rename = "Slug State")]
    pub state_slug: String,
}

impl PopulationRecord for StateRecord {
    fn id(&self) -> &str {
        &self.state_id
    }

    fn name(&self) -> &str {
        &self.state_name
    }

    fn year_id(&self) -> i64 {
        self.year_id
    }

    fn year_label(&self) -> &str {
        &self.year_label
    }

    fn population(&self) -> i64 {
        self.population
    }

    fn slug(&self) -> &str {
        &self.state_slug
    }
}
