use anyhow::Result;
use clap::ValueEnum;
use population_lib::chart::population_in_millions;
use population_lib::{ChartSeries, TableItem};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    #[value(alias = "md")]
    Markdown,
}

#[derive(Tabled, Serialize)]
struct StateRow {
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Population")]
    #[serde(rename = "Population")]
    population: String,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i64,
}

#[derive(Tabled, Serialize)]
struct SeriesRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i64,
    #[tabled(rename = "Population")]
    #[serde(rename = "Population")]
    population: String,
    #[tabled(rename = "Millions")]
    #[serde(rename = "Millions")]
    millions: String,
}

// -- Row builders --

fn build_state_rows(items: &[TableItem]) -> Vec<StateRow> {
    items
        .iter()
        .map(|i| StateRow {
            location: i.location.clone(),
            population: format_count(i.population),
            year: i.year,
        })
        .collect()
}

fn build_series_rows(series: &ChartSeries) -> Vec<SeriesRow> {
    series
        .points()
        .iter()
        .map(|p| SeriesRow {
            year: p.year,
            population: format_count(p.population),
            millions: format!("{:.2}", population_in_millions(p.population)),
        })
        .collect()
}

// -- Table output --

pub fn print_table(items: &[TableItem]) {
    println!("{}", Table::new(build_state_rows(items)));
}

pub fn print_series(series: &ChartSeries) {
    println!("{}", Table::new(build_series_rows(series)));
}

// -- Markdown output --

pub fn print_table_markdown(items: &[TableItem]) {
    let mut table = Table::new(build_state_rows(items));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_series_markdown(series: &ChartSeries) {
    let mut table = Table::new(build_series_rows(series));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_table_csv(items: &[TableItem]) -> Result<()> {
    write_csv(std::io::stdout(), build_state_rows(items))
}

pub fn print_series_csv(series: &ChartSeries) -> Result<()> {
    write_csv(std::io::stdout(), build_series_rows(series))
}

fn write_csv<W: std::io::Write, R: Serialize>(out: W, rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Formats a count with thousands separators (734821 -> "734,821").
fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
