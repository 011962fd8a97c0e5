use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;

use crate::config::SEED;

/// Monte Carlo estimator of π over the unit square.
///
/// Each instance owns its random stream and reseeds it on every
/// [`calculate`](Estimator::calculate), so repeated calls return the same value
/// and separate instances never disturb each other.
#[derive(Debug, Clone)]
pub struct Estimator<R = Pcg64> {
    niter: u64,
    seed: u64,
    rng: R,
}

impl Estimator<Pcg64> {
    pub fn new(niter: u64) -> Self {
        Self::with_seed(niter, SEED)
    }

    pub fn with_seed(niter: u64, seed: u64) -> Self {
        Self::with_rng_seed(niter, seed)
    }
}

impl<R: RngCore + SeedableRng> Estimator<R> {
    /// No validation happens here: a zero count only shows up as NaN from `calculate`.
    pub fn with_rng_seed(niter: u64, seed: u64) -> Self {
        Self {
            niter,
            seed,
            rng: R::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn niter(&self) -> u64 {
        self.niter
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of sampled points with `x² + y² <= 1`.
    pub fn count_inside(&mut self) -> u64 {
        self.rng = R::seed_from_u64(self.seed);

        let mut inside = 0u64;
        for _ in 0..self.niter {
            let x: f64 = self.rng.gen();
            let y: f64 = self.rng.gen();
            if x * x + y * y <= 1.0 {
                inside += 1;
            }
        }
        inside
    }

    /// Returns `4 * inside / niter`; NaN when `niter` is zero.
    pub fn calculate(&mut self) -> f64 {
        log::info!("Iterations : {}", self.niter);
        let inside = self.count_inside();
        log::debug!("{} of {} points inside the unit circle", inside, self.niter);
        4.0 * inside as f64 / self.niter as f64
    }
}
