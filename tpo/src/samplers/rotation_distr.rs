use anyhow::{Result, ensure};
use rand::Rng;

/// Finite set of evenly spaced rotations (in degrees), starting at 0°.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteRotDistr {
    rotations: Vec<f64>,
}

impl DiscreteRotDistr {
    /// `n` rotations spaced `360 / n` degrees apart
    pub fn evenly_spaced(n: usize) -> Result<Self> {
        ensure!(n > 0, "at least one rotation is required");
        let step = 360.0 / n as f64;
        let rotations = (0..n).map(|i| i as f64 * step).collect();
        Ok(Self { rotations })
    }

    pub fn rotations(&self) -> &[f64] {
        &self.rotations
    }

    /// Uniformly picks one of the rotations
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        self.rotations[rng.random_range(0..self.rotations.len())]
    }
}
