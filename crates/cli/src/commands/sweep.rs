use anyhow::Context;
use calculatepi_shared::config::SweepConfig;
use calculatepi_shared::sweep::run_sweep;

use crate::output;
use crate::OutputFormat;

pub fn run(min: u64, max: u64, step: u64, seed: u64, format: OutputFormat) -> anyhow::Result<()> {
    let config = SweepConfig { min, max, step, seed };
    let result = run_sweep(&config).context("sweep configuration rejected")?;

    match format {
        OutputFormat::Text => output::print_sweep(&result),
        OutputFormat::Json => output::print_sweep_json(&result)?,
    }
    Ok(())
}
