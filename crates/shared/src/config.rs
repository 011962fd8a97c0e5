use crate::estimator::Estimator;

// Baseline estimator parameters
pub const SEED: u64 = 35_791_246;
pub const DEFAULT_NITER: u64 = 500_000_000;
/// Largest count an `f64` front end can hand over without losing integer precision.
pub const MAX_EXACT_NITER: u64 = 1 << 53;

// Sweep defaults
pub const SWEEP_MIN: u64 = 100_000_000;
pub const SWEEP_MAX: u64 = 10_000_000_000;
pub const SWEEP_STEP: u64 = 100_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorConfig {
    pub niter: u64,
    pub seed: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            niter: DEFAULT_NITER,
            seed: SEED,
        }
    }
}

impl EstimatorConfig {
    pub fn build(&self) -> Estimator {
        Estimator::with_seed(self.niter, self.seed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub min: u64,
    pub max: u64,
    pub step: u64,
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min: SWEEP_MIN,
            max: SWEEP_MAX,
            step: SWEEP_STEP,
            seed: SEED,
        }
    }
}

impl SweepConfig {
    /// Sample counts visited by the sweep, `min` to `max` inclusive.
    pub fn counts(&self) -> impl Iterator<Item = u64> {
        let (min, max, step) = (self.min, self.max, self.step.max(1));
        std::iter::successors(Some(min), move |&n| n.checked_add(step))
            .take_while(move |&n| n <= max)
    }

    pub(crate) fn len(&self) -> usize {
        if self.step == 0 || self.min > self.max {
            return 0;
        }
        ((self.max - self.min) / self.step + 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EstimatorConfig::default();
        assert_eq!(config.niter, 500_000_000);
        assert_eq!(config.seed, 35_791_246);

        let sweep = SweepConfig::default();
        assert_eq!(sweep.len(), 100);
    }

    #[test]
    fn test_sweep_counts_inclusive() {
        let sweep = SweepConfig { min: 10, max: 50, step: 20, seed: SEED };
        let counts: Vec<u64> = sweep.counts().collect();
        assert_eq!(counts, vec![10, 30, 50]);
        assert_eq!(sweep.len(), counts.len());
    }

    #[test]
    fn test_sweep_counts_stop_before_overflow() {
        let sweep = SweepConfig { min: u64::MAX - 1, max: u64::MAX, step: 5, seed: SEED };
        assert_eq!(sweep.counts().count(), 1);
    }

    #[test]
    fn test_build_uses_config_seed() {
        let est = EstimatorConfig { niter: 10, seed: 7 }.build();
        assert_eq!(est.niter(), 10);
        assert_eq!(est.seed(), 7);
    }
}
