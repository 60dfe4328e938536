//! Query builder for the `/api/data` endpoint.

use url::Url;

use super::common::{Drilldown, Measure, Query, YearFilter};

/// Query for the `/api/data` endpoint.
///
/// Parameters are always serialized in the order `drilldowns`, `measures`,
/// `year`, so the same query always yields the same URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataQuery {
    pub drilldown: Drilldown,
    pub measures: Vec<Measure>,
    pub year: Option<YearFilter>,
}

impl DataQuery {
    /// Creates a query with the given drilldown and no measures or year filter.
    pub fn new(drilldown: Drilldown) -> Self {
        Self {
            drilldown,
            measures: Vec::new(),
            year: None,
        }
    }

    /// Population of every state for the latest year.
    pub fn states() -> Self {
        Self::new(Drilldown::State)
            .with_measure(Measure::Population)
            .with_year(YearFilter::Latest)
    }

    /// Population of the nation for every year.
    pub fn nations() -> Self {
        Self::new(Drilldown::Nation).with_measure(Measure::Population)
    }

    /// Adds a measure. Duplicates are ignored.
    pub fn with_measure(mut self, measure: Measure) -> Self {
        if !self.measures.contains(&measure) {
            self.measures.push(measure);
        }
        self
    }

    pub fn with_year(mut self, year: YearFilter) -> Self {
        self.year = Some(year);
        self
    }
}

impl Query for DataQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("drilldowns", self.drilldown.as_str());
        if !self.measures.is_empty() {
            let measures = self
                .measures
                .iter()
                .map(Measure::as_str)
                .collect::<Vec<_>>()
                .join(",");
            url.query_pairs_mut().append_pair("measures", &measures);
        }
        if let Some(year) = self.year {
            url.query_pairs_mut()
                .append_pair("year", year.to_string().as_str());
        }
        url
    }
}
