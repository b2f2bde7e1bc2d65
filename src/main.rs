use std::path::PathBuf;

use anyhow::{Context, Result};
use klimatdata::{MunicipalityEmissions, PipelineState};

const USAGE: &str = "usage: klimatdata <emissions.json> [dataset] [view]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path: PathBuf = args.next().context(USAGE)?.into();
    let dataset = args.next();
    let view = args.next();

    let state = PipelineState::from_env().context("initialising pipeline")?;

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let emissions: MunicipalityEmissions =
        serde_json::from_str(&text).context("parsing emissions JSON")?;

    log::info!(
        "loaded '{}': {} historical points, {} sectors",
        emissions.name,
        emissions.historical.len(),
        emissions.sectors.len()
    );

    let payload = state.prepare_chart(&emissions)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    if let Some(dataset) = dataset {
        let view = view.as_deref().unwrap_or("lista");
        let route = match state.resolve_route(&dataset, view) {
            Some(route) => route,
            None => {
                let known: Vec<_> = state
                    .datasets()
                    .descriptors()
                    .iter()
                    .map(|d| d.key)
                    .collect();
                log::warn!(
                    "falling back to the default dataset and view (known datasets: {})",
                    known.join(", ")
                );
                state
                    .default_route()
                    .context("dataset catalog is empty")?
            }
        };
        println!("{}", route.path);
    }

    Ok(())
}
