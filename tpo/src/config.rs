use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the tree packing optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TPOConfig {
    /// Seed for the PRNG. If undefined, the random strategy runs in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Size multiplier of the tree silhouette, 1.0 yields a tree 16 units wide and 24 units tall
    pub tree_scale: f64,
    /// Number of evenly spaced rotations a tree can take, 8 gives multiples of 45°
    pub n_rotations: usize,
    /// Configuration of the greedy spiral search
    pub spiral: SpiralConfig,
    /// Configuration of the randomized placement
    pub uniform: UniformConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpiralConfig {
    /// Distance between consecutive rings
    pub ring_step: f64,
    /// Rings are generated while their radius stays strictly below this value
    pub max_radius: f64,
    /// Angle between consecutive positions on a ring, in degrees
    pub angle_step: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct UniformConfig {
    /// Positions are sampled from `[-half_width, half_width)` in both dimensions
    pub half_width: f64,
    /// Number of samples drawn for a single tree before it is given up on
    pub max_attempts: usize,
}

impl Default for TPOConfig {
    fn default() -> Self {
        Self {
            prng_seed: None,
            tree_scale: 1.0,
            n_rotations: 8,
            spiral: SpiralConfig {
                ring_step: 20.0,
                max_radius: 150.0,
                angle_step: 45.0,
            },
            uniform: UniformConfig {
                half_width: 75.0,
                max_attempts: 1000,
            },
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl TPOConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tree_scale.is_finite() && self.tree_scale > 0.0,
            "tree_scale must be strictly positive, got {}",
            self.tree_scale
        );
        ensure!(self.n_rotations > 0, "n_rotations must be at least 1");

        let SpiralConfig {
            ring_step,
            max_radius,
            angle_step,
        } = self.spiral;
        ensure!(
            ring_step.is_finite() && ring_step > 0.0,
            "spiral ring_step must be strictly positive, got {ring_step}"
        );
        ensure!(
            max_radius.is_finite() && max_radius > 0.0,
            "spiral max_radius must be strictly positive, got {max_radius}"
        );
        ensure!(
            angle_step.is_finite() && angle_step > 0.0 && angle_step <= 360.0,
            "spiral angle_step must be in (0, 360], got {angle_step}"
        );

        let UniformConfig {
            half_width,
            max_attempts,
        } = self.uniform;
        ensure!(
            half_width.is_finite() && half_width > 0.0,
            "uniform half_width must be strictly positive, got {half_width}"
        );
        ensure!(max_attempts > 0, "uniform max_attempts must be at least 1");
        Ok(())
    }
}
