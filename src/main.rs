use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cellgrid::cli::CliArgs;
use cellgrid::fixture::GridFixture;
use cellgrid::presentation::CellAttributes;
use cellgrid::replay::{Replayer, StepRecord};
use cellgrid::tracing::GridSnapshot;
use cellgrid::{GridConfig, GridRegistry};

/// Everything printed after a replay
#[derive(Serialize)]
struct ReplayOutput {
    steps: Vec<StepRecord>,
    snapshot: GridSnapshot,
    attributes: Vec<CellAttributes>,
}

fn main() -> Result<()> {
    cellgrid::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    let grid_config = match &config.config {
        Some(path) => GridConfig::load_from(path),
        None => GridConfig::load(),
    };
    let fixture = GridFixture::load(&config.fixture)?;

    let mut steps = config.prelude.clone();
    if config.run_script {
        steps.extend(fixture.script.iter().cloned());
    }
    steps.extend(config.extra.iter().cloned());

    let mut registry = GridRegistry::with_keymap(grid_config.load_keymap());
    registry.register(fixture.to_grid());

    tracing::info!(grid = %fixture.id, steps = steps.len(), "replaying fixture");
    let records = Replayer::new(&mut registry, fixture.id.as_str()).run(&steps)?;

    let grid = registry
        .get(&fixture.id.as_str().into())
        .context("grid disappeared during replay")?;
    let attributes = grid
        .cells()
        .filter_map(|cell| CellAttributes::for_cell(grid, cell.position(), &grid_config.cell_class))
        .collect();

    let output = ReplayOutput {
        steps: records,
        snapshot: GridSnapshot::from_grid(grid),
        attributes,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
