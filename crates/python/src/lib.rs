//! Python extension module `calculatepipy`.
//!
//! ```python
//! from calculatepipy import PiCalculate
//! PiCalculate(niter=1000).calculate()
//! ```

use calculatepi_shared::{niter_from_f64, EstimateError, Estimator};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(name = "PiCalculate", module = "calculatepipy")]
pub struct PiCalculate {
    inner: Estimator,
}

#[pymethods]
impl PiCalculate {
    #[new]
    #[pyo3(signature = (niter))]
    fn new(niter: f64) -> PyResult<Self> {
        let niter = checked_niter(niter).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            inner: Estimator::new(niter),
        })
    }

    /// Calculate pi for the configured number of iterations
    fn calculate(&mut self) -> f64 {
        self.inner.calculate()
    }

    #[getter]
    fn niter(&self) -> u64 {
        self.inner.niter()
    }

    fn __repr__(&self) -> String {
        format!("PiCalculate(niter={})", self.inner.niter())
    }
}

fn checked_niter(niter: f64) -> Result<u64, EstimateError> {
    niter_from_f64(niter)
}

#[pymodule]
fn calculatepipy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PiCalculate>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_niter() {
        assert_eq!(checked_niter(500_000_000.0), Ok(500_000_000));
        assert_eq!(checked_niter(0.0), Err(EstimateError::Zero));
        assert_eq!(checked_niter(-1.0), Err(EstimateError::Negative(-1.0)));
        assert_eq!(checked_niter(2.5), Err(EstimateError::Fractional(2.5)));
        assert!(matches!(checked_niter(f64::NAN), Err(EstimateError::NonFinite(_))));
        assert!(matches!(checked_niter(1e20), Err(EstimateError::TooLarge { .. })));
    }

    #[test]
    fn test_error_message_reaches_value_error() {
        let message = checked_niter(2.5).unwrap_err().to_string();
        assert_eq!(message, "niter must be a whole number, got 2.5");
    }
}
