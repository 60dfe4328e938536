mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use population_lib::{DataClient, PopulationLoader, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "population")]
#[command(about = "Show U.S. state and national population from Data USA")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// Data USA endpoint to query
    #[arg(long, env = "DATAUSA_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Latest population of every state
    States(commands::states::StatesArgs),
    /// National population for every year
    Nations,
    /// Load both datasets at once and show whatever succeeded
    Overview(commands::states::StatesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("population=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = cli.output;

    let loader = PopulationLoader::new(DataClient::with_base_url(&cli.base_url));

    match &cli.command {
        Commands::States(args) => commands::states::run(args, &loader, &format).await?,
        Commands::Nations => commands::nations::run(&loader, &format).await?,
        Commands::Overview(args) => commands::overview::run(args, &loader, &format).await?,
    }

    Ok(())
}
