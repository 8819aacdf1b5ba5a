use std::time::Instant;

use anyhow::Result;
use log::{debug, info};
use ordered_float::NotNan;
use thousands::Separable;
use treepack::entities::{Layout, Packing, Placement, ShapeTemplate};
use treepack::geometry::primitives::SPolygon;

use crate::config::TPOConfig;
use crate::samplers::rotation_distr::DiscreteRotDistr;
use crate::samplers::spiral_sampler::SpiralSampler;

/// Places trees one by one on the first ring of the spiral which can hold them.
/// On that ring, every position and rotation is evaluated and the candidate leading to the
/// smallest enclosing square is kept. Ties go to the candidate evaluated first.
pub struct GreedySpiralOptimizer {
    pub layout: Layout,
    pub config: TPOConfig,
    pub sampler: SpiralSampler,
    pub rot_distr: DiscreteRotDistr,
    pub n_requested: usize,
    pub candidate_counter: usize,
}

/// Best admissible candidate found on a ring so far
struct RingBest {
    placement: Placement,
    shape: SPolygon,
    bbox_size: NotNan<f64>,
}

impl GreedySpiralOptimizer {
    pub fn new(template: ShapeTemplate, config: TPOConfig, n_requested: usize) -> Result<Self> {
        let rot_distr = DiscreteRotDistr::evenly_spaced(config.n_rotations)?;
        Ok(Self {
            layout: Layout::new(template),
            config,
            sampler: SpiralSampler::new(config.spiral),
            rot_distr,
            n_requested,
            candidate_counter: 0,
        })
    }

    pub fn solve(mut self) -> Packing {
        let start = Instant::now();

        for id in 1..=self.n_requested {
            match self.search(id) {
                Some(best) => {
                    debug!(
                        "[GS] placing tree {}/{} at [{}], box size: {:.1}",
                        id, self.n_requested, best.placement.d_transf, best.bbox_size
                    );
                    self.layout.place_materialized(best.placement, best.shape);
                }
                None => {
                    debug!("[GS] no admissible position found for tree {id}");
                }
            }
        }

        info!(
            "[GS] optimization finished in {:.3}ms ({} candidates)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.candidate_counter.separate_with_commas()
        );
        info!(
            "[GS] placed {}/{} trees, box size: {:.1}",
            self.layout.n_placed(),
            self.n_requested,
            self.layout.bbox_size()
        );

        self.layout.into_packing(self.n_requested)
    }

    /// Searches the rings from the inside out, returns the best candidate of the first ring with an admissible one.
    fn search(&mut self, id: usize) -> Option<RingBest> {
        let layout = &self.layout;
        let template = layout.template();
        let mut buffer = template.shape().clone();

        for (ring_idx, ring) in self.sampler.rings().enumerate() {
            let mut best: Option<RingBest> = None;
            for &pos in ring.iter() {
                for &rotation in self.rot_distr.rotations() {
                    self.candidate_counter += 1;
                    let placement = Placement::new(id, rotation, pos);
                    template.materialize_into(&mut buffer, &placement.d_transf);

                    if !layout.is_admissible(&buffer) {
                        continue;
                    }

                    let bbox_size = NotNan::new(layout.bbox_size_with(&buffer))
                        .expect("box size is NaN");
                    if best.as_ref().is_none_or(|b| bbox_size < b.bbox_size) {
                        best = Some(RingBest {
                            placement,
                            shape: buffer.clone(),
                            bbox_size,
                        });
                    }
                }
            }
            if best.is_some() {
                debug!("[GS] tree {id} fits on ring {ring_idx}");
                return best;
            }
        }
        None
    }
}
