use std::time::Instant;

use crate::config::SweepConfig;
use crate::error::EstimateError;
use crate::estimator::Estimator;
use crate::niter::validate_niter;
use crate::result::{SweepPoint, SweepResult};

pub fn validate(config: &SweepConfig) -> Result<(), EstimateError> {
    if config.step == 0 {
        return Err(EstimateError::InvalidSweep("step must be greater than zero".into()));
    }
    if config.min > config.max {
        return Err(EstimateError::InvalidSweep(format!(
            "min ({}) is greater than max ({})",
            config.min, config.max
        )));
    }
    validate_niter(config.min)?;
    validate_niter(config.max)?;
    Ok(())
}

/// Runs one estimator per sample count in the sweep, in order, on the calling thread.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepResult, EstimateError> {
    let start = Instant::now();
    run_sweep_with_clock(config, || start.elapsed().as_secs_f64() * 1000.0)
}

/// Like [`run_sweep`], timing each run with `now_ms`, a millisecond clock.
/// Hosts without `std::time` (browsers) pass their own.
pub fn run_sweep_with_clock<F>(config: &SweepConfig, mut now_ms: F) -> Result<SweepResult, EstimateError>
where
    F: FnMut() -> f64,
{
    validate(config)?;
    log::info!(
        "Sweeping {} sample counts from {} to {} (step {})",
        config.len(),
        config.min,
        config.max,
        config.step
    );

    let points = config
        .counts()
        .map(|niter| {
            let start = now_ms();
            let pi = Estimator::with_seed(niter, config.seed).calculate();
            let duration = now_ms() - start;
            SweepPoint { niter, pi, duration }
        })
        .collect();

    Ok(SweepResult::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEED;

    fn sweep(min: u64, max: u64, step: u64) -> SweepConfig {
        SweepConfig { min, max, step, seed: SEED }
    }

    #[test]
    fn test_points_match_standalone_estimates() {
        let result = run_sweep(&sweep(100, 500, 200)).unwrap();
        let counts: Vec<u64> = result.pis.iter().map(|p| p.niter).collect();
        assert_eq!(counts, vec![100, 300, 500]);
        for p in &result.pis {
            assert_eq!(p.pi, Estimator::new(p.niter).calculate());
            assert!(p.duration >= 0.0);
        }
    }

    #[test]
    fn test_single_point() {
        let result = run_sweep(&sweep(1000, 1000, 1)).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.pis[0].pi, 3.22);
    }

    #[test]
    fn test_custom_clock_durations() {
        let mut ticks = 0.0;
        let clock = || {
            ticks += 2.5;
            ticks
        };
        let result = run_sweep_with_clock(&sweep(10, 30, 10), clock).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.pis.iter().all(|p| p.duration == 2.5));
        assert_eq!(result.total_duration(), 7.5);
    }

    #[test]
    fn test_rejects_bad_sweeps() {
        assert!(matches!(
            run_sweep(&sweep(10, 100, 0)),
            Err(EstimateError::InvalidSweep(_))
        ));
        assert!(matches!(
            run_sweep(&sweep(100, 10, 5)),
            Err(EstimateError::InvalidSweep(_))
        ));
        assert_eq!(run_sweep(&sweep(0, 10, 5)), Err(EstimateError::Zero));
    }
}
