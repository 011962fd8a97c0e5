#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("niter must be a finite number, got {0}")]
    NonFinite(f64),
    #[error("niter must not be negative, got {0}")]
    Negative(f64),
    #[error("niter must be greater than zero")]
    Zero,
    #[error("niter must be a whole number, got {0}")]
    Fractional(f64),
    #[error("niter {value} exceeds the maximum of {max}")]
    TooLarge { value: f64, max: u64 },
    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),
}
