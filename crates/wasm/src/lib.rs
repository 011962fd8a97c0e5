use calculatepi_shared::config::SweepConfig;
use calculatepi_shared::result::SweepResult;
use calculatepi_shared::sweep::run_sweep_with_clock;
use calculatepi_shared::{niter_from_f64, EstimateError, Estimator, SEED};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance)]
    fn now() -> f64;
}

/// Browser binding: `new PiCalculate(niter).calculate()`.
#[wasm_bindgen]
pub struct PiCalculate {
    inner: Estimator,
}

#[wasm_bindgen]
impl PiCalculate {
    #[wasm_bindgen(constructor)]
    pub fn new(niter: f64) -> Result<PiCalculate, JsError> {
        let niter = checked_niter(niter)?;
        Ok(Self {
            inner: Estimator::new(niter),
        })
    }

    pub fn calculate(&mut self) -> f64 {
        self.inner.calculate()
    }

    /// Sample count as a JS number; always exactly representable.
    #[wasm_bindgen(getter)]
    pub fn niter(&self) -> f64 {
        self.inner.niter() as f64
    }
}

/// Runs the sweep `min..=max` by `step` and returns the `{"pis": [...]}` payload as JSON.
#[wasm_bindgen]
pub fn sweep(min: f64, max: f64, step: f64) -> Result<String, JsError> {
    let result = sweep_with_clock(min, max, step, now)?;
    Ok(serde_json::to_string(&result)?)
}

fn checked_niter(niter: f64) -> Result<u64, EstimateError> {
    niter_from_f64(niter)
}

fn sweep_config(min: f64, max: f64, step: f64) -> Result<SweepConfig, EstimateError> {
    // A zero step is left for the sweep validator, which names it.
    let step = if step == 0.0 { 0 } else { checked_niter(step)? };
    Ok(SweepConfig {
        min: checked_niter(min)?,
        max: checked_niter(max)?,
        step,
        seed: SEED,
    })
}

fn sweep_with_clock<F: FnMut() -> f64>(
    min: f64,
    max: f64,
    step: f64,
    now_ms: F,
) -> Result<SweepResult, EstimateError> {
    run_sweep_with_clock(&sweep_config(min, max, step)?, now_ms)
}
