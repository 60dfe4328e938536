use anyhow::Result;
use clap::Args;
use population_lib::table::{self, SortOrder, SortSpec, TableItem};
use population_lib::types::StateDataset;
use population_lib::{validation, PopulationLoader};

use crate::commands::ctrl_c_token;
use crate::output::{print_json, print_table, print_table_csv, print_table_markdown, OutputFormat};

#[derive(Args)]
pub struct StatesArgs {
    /// Sort column: location, population, year
    #[arg(long, default_value = "location")]
    pub sort_by: String,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

impl StatesArgs {
    pub fn sort_spec(&self) -> Result<SortSpec> {
        let column = validation::validate_sort_column(&self.sort_by)?;
        let order = if self.desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        Ok(SortSpec::new(column, order))
    }
}

pub async fn run(args: &StatesArgs, loader: &PopulationLoader, format: &OutputFormat) -> Result<()> {
    let spec = args.sort_spec()?;
    let states = loader.load_states(&ctrl_c_token()).await?;
    print_states(&states, spec, format)
}

/// Prints the state table sorted by `spec`.
pub fn print_states(states: &StateDataset, spec: SortSpec, format: &OutputFormat) -> Result<()> {
    validation::warn_on_issues("state", states);
    eprintln!("{} states", states.len());

    let mut items: Vec<TableItem> = table::table_items(states);
    table::sort_items(&mut items, spec);

    match format {
        OutputFormat::Table => print_table(&items),
        OutputFormat::Json => print_json(&items)?,
        OutputFormat::Csv => print_table_csv(&items)?,
        OutputFormat::Markdown => print_table_markdown(&items),
    }
    Ok(())
}
