use calculatepi_shared::config::EstimatorConfig;
use calculatepi_shared::result::Estimate;
use calculatepi_shared::validate_niter;

use crate::output;

pub fn estimate(config: &EstimatorConfig) -> anyhow::Result<Estimate> {
    let niter = validate_niter(config.niter)?;

    let start = std::time::Instant::now();
    let pi = config.build().calculate();
    log::debug!("Estimated in {:.2}s", start.elapsed().as_secs_f64());

    Ok(Estimate { niter, pi })
}

pub fn run(config: &EstimatorConfig) -> anyhow::Result<()> {
    output::print_estimate(&estimate(config)?);
    Ok(())
}
