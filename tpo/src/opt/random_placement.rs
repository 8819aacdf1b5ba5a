use std::time::Instant;

use anyhow::Result;
use log::{debug, info};
use rand::rngs::SmallRng;
use thousands::Separable;
use treepack::entities::{Layout, Packing, Placement, ShapeTemplate};

use crate::config::TPOConfig;
use crate::samplers::rotation_distr::DiscreteRotDistr;
use crate::samplers::uniform_rect_sampler::UniformRectSampler;

/// Places trees one by one at the first admissible candidate drawn uniformly from a square around the origin.
/// A tree is left out when `max_attempts` samples in a row are all rejected.
pub struct RandomPlacementOptimizer {
    pub layout: Layout,
    pub config: TPOConfig,
    pub sampler: UniformRectSampler,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub n_requested: usize,
    pub sample_counter: usize,
}

impl RandomPlacementOptimizer {
    pub fn new(
        template: ShapeTemplate,
        config: TPOConfig,
        n_requested: usize,
        rng: SmallRng,
    ) -> Result<Self> {
        let rot_distr = DiscreteRotDistr::evenly_spaced(config.n_rotations)?;
        let sampler = UniformRectSampler::centered(config.uniform.half_width, rot_distr)?;
        Ok(Self {
            layout: Layout::new(template),
            config,
            sampler,
            rng,
            n_requested,
            sample_counter: 0,
        })
    }

    pub fn solve(mut self) -> Packing {
        let start = Instant::now();

        for id in 1..=self.n_requested {
            match self.search(id) {
                Some(placement) => {
                    debug!(
                        "[RP] placing tree {}/{} at [{}]",
                        id, self.n_requested, placement.d_transf
                    );
                    self.layout.place(placement);
                }
                None => {
                    debug!(
                        "[RP] no admissible position found for tree {id} after {} attempts",
                        self.config.uniform.max_attempts
                    );
                }
            }
        }

        info!(
            "[RP] optimization finished in {:.3}ms ({} samples)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.sample_counter.separate_with_commas()
        );
        info!(
            "[RP] placed {}/{} trees, box size: {:.1}",
            self.layout.n_placed(),
            self.n_requested,
            self.layout.bbox_size()
        );

        self.layout.into_packing(self.n_requested)
    }

    fn search(&mut self, id: usize) -> Option<Placement> {
        let template = self.layout.template();
        let mut buffer = template.shape().clone();

        for _ in 0..self.config.uniform.max_attempts {
            self.sample_counter += 1;
            let d_transf = self.sampler.sample(&mut self.rng);
            template.materialize_into(&mut buffer, &d_transf);
            if self.layout.is_admissible(&buffer) {
                return Some(Placement { id, d_transf });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn first_sample_is_accepted_in_an_empty_layout() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        let mut opt = RandomPlacementOptimizer::new(
            template,
            TPOConfig::default(),
            1,
            SmallRng::seed_from_u64(0),
        )
        .unwrap();
        assert!(opt.search(1).is_some());
        assert_eq!(opt.sample_counter, 1);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut config = TPOConfig::default();
        //every sample lands on the origin, where the first tree stands
        config.uniform.half_width = 0.4;
        config.uniform.max_attempts = 25;
        let template = ShapeTemplate::tree(1.0).unwrap();
        let packing = RandomPlacementOptimizer::new(template, config, 3, SmallRng::seed_from_u64(1))
            .unwrap()
            .solve();

        assert_eq!(packing.n_placed(), 1);
        assert_eq!(packing.n_missing(), 2);
    }
}
