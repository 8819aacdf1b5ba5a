use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail, ensure};
use clap::ValueEnum;
use log::{info, warn};
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use treepack::entities::{Packing, ShapeTemplate};
use treepack::util::assertions;

use crate::config::TPOConfig;
use crate::opt::greedy_spiral::GreedySpiralOptimizer;
use crate::opt::random_placement::RandomPlacementOptimizer;

pub mod greedy_spiral;
pub mod random_placement;

/// Largest number of trees a single run accepts
pub const MAX_N_TREES: usize = 200;

/// Placement strategy of a packing run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Deterministic search over rings around the origin, keeping the candidate with the smallest box per ring
    Greedy,
    /// Rejection sampling of uniformly drawn candidates
    Random,
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Strategy::Greedy),
            "random" => Ok(Strategy::Random),
            _ => bail!("unknown strategy: {s:?}, expected \"greedy\" or \"random\""),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Random => write!(f, "random"),
        }
    }
}

/// Packs `n_trees` copies of the tree silhouette using `strategy`.
/// `rng` is only consumed by the random strategy.
///
/// Trees for which no admissible position is found are left out of the packing,
/// compare [`Packing::n_placed`] with [`Packing::n_requested`].
pub fn run_packing(
    n_trees: usize,
    strategy: Strategy,
    config: &TPOConfig,
    rng: SmallRng,
) -> Result<Packing> {
    ensure!(
        (1..=MAX_N_TREES).contains(&n_trees),
        "number of trees must be between 1 and {MAX_N_TREES}, got {n_trees}"
    );
    config.validate()?;

    let template = ShapeTemplate::tree(config.tree_scale)?;

    info!("[TPO] packing {n_trees} trees with the {strategy} strategy");

    let packing = match strategy {
        Strategy::Greedy => GreedySpiralOptimizer::new(template, *config, n_trees)?.solve(),
        Strategy::Random => RandomPlacementOptimizer::new(template, *config, n_trees, rng)?.solve(),
    };

    debug_assert!(assertions::packing_is_collision_free(&packing));
    debug_assert!(assertions::packing_ids_are_increasing(&packing));
    debug_assert!(assertions::packing_bbox_encloses_all_vertices(&packing));

    if !packing.is_complete() {
        warn!(
            "[TPO] only {}/{} trees could be placed, {} were left out",
            packing.n_placed(),
            packing.n_requested(),
            packing.n_missing()
        );
    }
    info!(
        "[TPO] box size: {:.1}, score: {:.2}",
        packing.bbox_size(),
        packing.score().unwrap_or(0.0)
    );

    Ok(packing)
}
