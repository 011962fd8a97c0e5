use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub niter: u64,
    pub pi: f64,
}

impl Estimate {
    pub fn abs_error(&self) -> f64 {
        (self.pi - std::f64::consts::PI).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub niter: u64,
    pub pi: f64,
    /// Wall-clock milliseconds spent in `calculate`.
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub pis: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn from_points(pis: Vec<SweepPoint>) -> Self {
        Self { pis }
    }

    pub fn len(&self) -> usize {
        self.pis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pis.is_empty()
    }

    pub fn total_duration(&self) -> f64 {
        self.pis.iter().map(|p| p.duration).sum()
    }

    /// Point whose estimate lies closest to π.
    pub fn best(&self) -> Option<&SweepPoint> {
        self.pis.iter().min_by(|a, b| {
            let ea = (a.pi - std::f64::consts::PI).abs();
            let eb = (b.pi - std::f64::consts::PI).abs();
            ea.total_cmp(&eb)
        })
    }
}
