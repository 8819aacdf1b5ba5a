use itertools::Itertools;

use crate::config::SpiralConfig;

/// Enumerates candidate positions on concentric rings around the origin.
/// Rings are visited from the inside out, positions on a ring counter-clockwise starting from the positive x-axis.
/// Coordinates are rounded to whole units.
#[derive(Clone, Copy, Debug)]
pub struct SpiralSampler {
    pub config: SpiralConfig,
}

impl SpiralSampler {
    pub fn new(config: SpiralConfig) -> Self {
        Self { config }
    }

    /// Radii of the rings: `0, ring_step, 2·ring_step, ...` while strictly below `max_radius`
    pub fn radii(&self) -> impl Iterator<Item = f64> + use<> {
        let SpiralConfig {
            ring_step,
            max_radius,
            ..
        } = self.config;
        (0..)
            .map(move |i| i as f64 * ring_step)
            .take_while(move |&r| r < max_radius)
    }

    /// Positions on the ring of radius `r`. The ring of radius 0 yields the origin once per angle.
    pub fn ring(&self, r: f64) -> impl Iterator<Item = (f64, f64)> + use<> {
        let angle_step = self.config.angle_step;
        (0..)
            .map(move |i| i as f64 * angle_step)
            .take_while(|&a| a < 360.0)
            .map(move |a| {
                let a = a.to_radians();
                ((r * a.cos()).round(), (r * a.sin()).round())
            })
    }

    /// All rings, innermost first
    pub fn rings(&self) -> impl Iterator<Item = Vec<(f64, f64)>> + use<> {
        let sampler = *self;
        self.radii().map(move |r| sampler.ring(r).collect_vec())
    }
}
