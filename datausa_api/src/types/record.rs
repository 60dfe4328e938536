/// Accessors shared by state and nation rows, so consumers can be generic
/// over the drilldown.
pub trait PopulationRecord {
    /// Data USA identifier (e.g. "04000US02").
    fn id(&self) -> &str;
    /// Display name of the place.
    fn name(&self) -> &str;
    /// Numeric year, as sent in `ID Year`.
    fn year_id(&self) -> i64;
    /// Year label, as sent in `Year`.
    fn year_label(&self) -> &str;
    fn population(&self) -> i64;
    /// URL slug of the place.
    fn slug(&self) -> &str;
}
