use anyhow::Result;
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use treepack::geometry::DTransformation;
use treepack::geometry::primitives::Rect;

use crate::samplers::rotation_distr::DiscreteRotDistr;

/// Samples a `DTransformation` uniformly from a `Rect` and a `DiscreteRotDistr`.
/// Sampled positions are rounded to whole units.
#[derive(Clone, Debug)]
pub struct UniformRectSampler {
    pub bbox: Rect,
    pub rot_distr: DiscreteRotDistr,
    uniform_x: Uniform<f64>,
    uniform_y: Uniform<f64>,
}

impl UniformRectSampler {
    pub fn new(bbox: Rect, rot_distr: DiscreteRotDistr) -> Result<Self> {
        let uniform_x = Uniform::new(bbox.x_min, bbox.x_max)?;
        let uniform_y = Uniform::new(bbox.y_min, bbox.y_max)?;
        Ok(Self {
            bbox,
            rot_distr,
            uniform_x,
            uniform_y,
        })
    }

    /// Square `[-half_width, half_width)²` centered on the origin
    pub fn centered(half_width: f64, rot_distr: DiscreteRotDistr) -> Result<Self> {
        Self::new(
            Rect::new(-half_width, -half_width, half_width, half_width),
            rot_distr,
        )
    }

    pub fn sample(&self, rng: &mut impl Rng) -> DTransformation {
        let x_sample = self.uniform_x.sample(rng).round();
        let y_sample = self.uniform_y.sample(rng).round();
        let r_sample = self.rot_distr.sample(rng);

        DTransformation::new(r_sample, (x_sample, y_sample))
    }
}
