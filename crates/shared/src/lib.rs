pub mod config;
pub mod error;
pub mod estimator;
pub mod niter;
pub mod result;
pub mod sweep;

pub use config::{EstimatorConfig, SweepConfig, DEFAULT_NITER, SEED};
pub use error::EstimateError;
pub use estimator::Estimator;
pub use niter::{niter_from_f64, validate_niter};
