//! Per-tick force and potential sample buffers
//!
//! The pairwise force step records one (r, force) and one (r, potential)
//! pair per tick. Buffers are append-only and unbounded, in tick order,
//! with no deduplication; an external plot or CSV dump consumes them as-is.

/// One recorded sample: separation paired with the value measured there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub r: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SampleRecorder {
    forces: Vec<Sample>,
    potentials: Vec<Sample>,
}

impl SampleRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a (separation, force) sample
    pub fn record_force(&mut self, r: f64, force: f64) {
        self.forces.push(Sample { r, value: force });
    }

    /// Append a (separation, potential) sample
    pub fn record_potential(&mut self, r: f64, potential: f64) {
        self.potentials.push(Sample { r, value: potential });
    }

    pub fn forces(&self) -> &[Sample] {
        &self.forces
    }

    pub fn potentials(&self) -> &[Sample] {
        &self.potentials
    }
}
