use calculatepi_shared::result::{Estimate, SweepResult};

pub fn print_estimate(estimate: &Estimate) {
    println!("The value of the pi is : {}", estimate.pi);
}

pub fn print_sweep(result: &SweepResult) {
    println!("\n========================================");
    println!("  {:>14}  {:>12}  {:>12}", "niter", "pi", "time (ms)");
    for p in &result.pis {
        println!("  {:>14}  {:>12.8}  {:>12.2}", p.niter, p.pi, p.duration);
    }
    println!("========================================");
    println!("  Runs:        {}", result.len());
    println!("  Total time:  {:.2}s", result.total_duration() / 1000.0);
    if let Some(best) = result.best() {
        println!(
            "  Closest:     {} at niter={} (error {:.2e})",
            best.pi,
            best.niter,
            (best.pi - std::f64::consts::PI).abs()
        );
    }
    println!("========================================");
}

pub fn print_sweep_json(result: &SweepResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
