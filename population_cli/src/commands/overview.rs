use anyhow::{bail, Result};
use population_lib::PopulationLoader;

use crate::commands::nations::print_nations;
use crate::commands::states::{print_states, StatesArgs};
use crate::commands::ctrl_c_token;
use crate::output::OutputFormat;

/// Loads both datasets concurrently. Each section is printed on its own, so
/// a failed state request still shows the nation series. Fails only when
/// neither dataset loaded.
///
/// JSON output is one document holding both datasets. CSV is rejected since
/// the two datasets have different columns.
pub async fn run(args: &StatesArgs, loader: &PopulationLoader, format: &OutputFormat) -> Result<()> {
    check_format(format)?;
    let spec = args.sort_spec()?;
    let snapshot = loader.load_all(&ctrl_c_token()).await;

    if let (Err(states), Err(nations)) = (&snapshot.states, &snapshot.nations) {
        bail!("no data loaded (states: {}; nations: {})", states, nations);
    }

    if *format == OutputFormat::Json {
        println!("{}", snapshot.report(spec).to_json()?);
        return Ok(());
    }

    match &snapshot.states {
        Ok(states) => print_states(states, spec, format)?,
        Err(e) => eprintln!("State population unavailable: {}", e),
    }
    match &snapshot.nations {
        Ok(nations) => print_nations(nations, format)?,
        Err(e) => eprintln!("Nation population unavailable: {}", e),
    }

    Ok(())
}

fn check_format(format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Csv {
        bail!("csv output is not supported for overview; use states or nations");
    }
    Ok(())
}
