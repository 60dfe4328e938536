//! Shared query infrastructure: the [`Query`] trait and the parameter enums.

use std::fmt;

use url::Url;

/// Trait implemented by query builders. Serializes the query's parameters
/// onto a base URL.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Granularity of the returned rows (`drilldowns` parameter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drilldown {
    /// One row per U.S. state per year.
    State,
    /// One row per nation per year.
    Nation,
}

impl Drilldown {
    pub fn as_str(&self) -> &'static str {
        match self {
            Drilldown::State => "State",
            Drilldown::Nation => "Nation",
        }
    }
}

impl fmt::Display for Drilldown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistic selected by the `measures` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measure {
    Population,
}

impl Measure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Population => "Population",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restricts rows to a year (`year` parameter). Omitting it returns all years.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearFilter {
    /// Most recent year the API has data for.
    Latest,
    /// A specific calendar year.
    Year(i32),
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::Latest => f.write_str("latest"),
            YearFilter::Year(year) => write!(f, "{}", year),
        }
    }
}
