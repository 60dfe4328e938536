//! Table rows for the per-state population view.

use std::cmp::Ordering;
use std::str::FromStr;

use datausa_api::types::PopulationRecord;
use serde::Serialize;

/// One row of the population table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableItem {
    pub location: String,
    pub population: i64,
    pub year: i64,
}

impl TableItem {
    pub fn from_record<R: PopulationRecord>(record: &R) -> Self {
        Self {
            location: record.name().to_string(),
            population: record.population(),
            year: record.year_id(),
        }
    }
}

/// Maps records to rows, preserving API order.
pub fn table_items<'a, R, I>(records: I) -> Vec<TableItem>
where
    R: PopulationRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records.into_iter().map(TableItem::from_record).collect()
}

/// Column the table is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    Location,
    Population,
    Year,
}

impl FromStr for SortColumn {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "location" => Ok(SortColumn::Location),
            "population" => Ok(SortColumn::Population),
            "year" => Ok(SortColumn::Year),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sort column and direction. Defaults to location, ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(column: SortColumn, order: SortOrder) -> Self {
        Self { column, order }
    }

    fn compare(&self, a: &TableItem, b: &TableItem) -> Ordering {
        let ord = match self.column {
            SortColumn::Location => a.location.cmp(&b.location),
            SortColumn::Population => a.population.cmp(&b.population),
            SortColumn::Year => a.year.cmp(&b.year),
        };
        match self.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

/// Sorts rows in place. The sort is stable: equal keys keep their current order.
pub fn sort_items(items: &mut [TableItem], spec: SortSpec) {
    items.sort_by(|a, b| spec.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(location: &str, population: i64, year: i64) -> TableItem {
        TableItem {
            location: location.to_string(),
            population,
            year,
        }
    }

    fn sample() -> Vec<TableItem> {
        vec![
            item("New Jersey", 9_249_063, 2022),
            item("Alabama", 5_028_092, 2022),
            item("Alaska", 734_821, 2022),
        ]
    }

    fn locations(items: &[TableItem]) -> Vec<&str> {
        items.iter().map(|i| i.location.as_str()).collect()
    }

    #[test]
    fn default_sort_is_location_ascending() {
        let mut items = sample();
        sort_items(&mut items, SortSpec::default());
        assert_eq!(locations(&items), vec!["Alabama", "Alaska", "New Jersey"]);
    }

    #[test]
    fn population_descending() {
        let mut items = sample();
        sort_items(
            &mut items,
            SortSpec::new(SortColumn::Population, SortOrder::Descending),
        );
        assert_eq!(locations(&items), vec!["New Jersey", "Alabama", "Alaska"]);
    }

    #[test]
    fn equal_years_keep_order() {
        let mut items = sample();
        sort_items(&mut items, SortSpec::new(SortColumn::Year, SortOrder::Ascending));
        assert_eq!(locations(&items), vec!["New Jersey", "Alabama", "Alaska"]);
    }

    #[test]
    fn sort_column_from_str() {
        assert_eq!("year".parse::<SortColumn>(), Ok(SortColumn::Year));
        assert!("Year ".parse::<SortColumn>().is_err());
    }

    #[test]
    fn from_record_uses_year_id() {
        let record = datausa_api::types::StateRecord {
            state_id: "04000US02".to_string(),
            state_name: "Alaska".to_string(),
            year_id: 2022,
            year_label: "2022".to_string(),
            population: 734_821,
            state_slug: "alaska".to_string(),
        };
        let rows = table_items(&[record]);
        assert_eq!(rows, vec![item("Alaska", 734_821, 2022)]);
    }
}
