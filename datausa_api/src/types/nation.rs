//! Nation-level population rows.

use serde::{Deserialize, Serialize};

use super::PopulationRecord;

/// Data USA nation identifier (e.g. "01000US").
pub type NationID = String;

/// Population of a nation for one year.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NationRecord {
    #[serde(rename = "ID Nation")]
    pub nation_id: NationID,

    #[serde(rename = "Nation")]
    pub nation_name: String,

    #[serde(rename = "ID Year")]
    pub year_id: i64,

    #[serde(rename = "Year")]
    pub year_label: String,

    #[serde(rename = "Population")]
    pub population: i64,

    #[serde(rename = "Slug Nation")]
    pub nation_slug: String,
}

impl PopulationRecord for NationRecord {
    fn id(&self) -> &str {
        &self.nation_id
    }

    fn name(&self) -> &str {
        &self.nation_name
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
        &self.nation_slug
    }
}
