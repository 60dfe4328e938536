use anyhow::Result;
use population_lib::types::NationDataset;
use population_lib::{validation, ChartSeries, PopulationLoader};

use crate::commands::ctrl_c_token;
use crate::output::{print_json, print_series, print_series_csv, print_series_markdown, OutputFormat};

pub async fn run(loader: &PopulationLoader, format: &OutputFormat) -> Result<()> {
    let nations = loader.load_nations(&ctrl_c_token()).await?;
    print_nations(&nations, format)
}

/// Prints the national series, oldest year first.
pub fn print_nations(nations: &NationDataset, format: &OutputFormat) -> Result<()> {
    validation::warn_on_issues("nation", nations);

    let series = ChartSeries::from_records(nations);
    if let Some((from, to)) = series.x_domain() {
        eprintln!("Years {}-{}", from, to);
    }

    match format {
        OutputFormat::Table => print_series(&series),
        OutputFormat::Json => print_json(&series)?,
        OutputFormat::Csv => print_series_csv(&series)?,
        OutputFormat::Markdown => print_series_markdown(&series),
    }
    Ok(())
}
