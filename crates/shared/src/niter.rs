//! Sample-count validation shared by every front end.
//!
//! Hosts that hand over a floating-point count (JSON, Python, JavaScript) go
//! through [`niter_from_f64`]. Non-integral, non-positive, non-finite and
//! imprecisely representable values are rejected rather than truncated.

use crate::config::MAX_EXACT_NITER;
use crate::error::EstimateError;

pub fn niter_from_f64(value: f64) -> Result<u64, EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::NonFinite(value));
    }
    if value < 0.0 {
        return Err(EstimateError::Negative(value));
    }
    if value == 0.0 {
        return Err(EstimateError::Zero);
    }
    if value.fract() != 0.0 {
        return Err(EstimateError::Fractional(value));
    }
    if value > MAX_EXACT_NITER as f64 {
        return Err(EstimateError::TooLarge {
            value,
            max: MAX_EXACT_NITER,
        });
    }
    Ok(value as u64)
}

pub fn validate_niter(niter: u64) -> Result<u64, EstimateError> {
    if niter == 0 {
        return Err(EstimateError::Zero);
    }
    if niter > MAX_EXACT_NITER {
        return Err(EstimateError::TooLarge {
            value: niter as f64,
            max: MAX_EXACT_NITER,
        });
    }
    Ok(niter)
}
