mod common;
pub use self::common::{Drilldown, Measure, Query, YearFilter};

mod data;
pub use self::data::DataQuery;
