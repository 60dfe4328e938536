//! Year/population series for the nation chart.

use datausa_api::types::PopulationRecord;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub year: i64,
    pub population: i64,
}

/// Points ordered by year, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_records<'a, R, I>(records: I) -> Self
    where
        R: PopulationRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut points: Vec<ChartPoint> = records
            .into_iter()
            .map(|r| ChartPoint {
                year: r.year_id(),
                population: r.population(),
            })
            .collect();
        points.sort_by_key(|p| p.year);
        Self { points }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest and latest year, or `None` for an empty series.
    pub fn x_domain(&self) -> Option<(i64, i64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.year, last.year))
    }

    pub fn y_max(&self) -> Option<i64> {
        self.points.iter().map(|p| p.population).max()
    }
}

/// Scales a population count for the "Population in Millions" axis.
pub fn population_in_millions(population: i64) -> f64 {
    population as f64 / 1_000_000.0
}
