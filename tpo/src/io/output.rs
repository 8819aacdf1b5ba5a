use serde::{Deserialize, Serialize};
use treepack::io::ext_repr::ExtPacking;

use crate::config::TPOConfig;
use crate::opt::Strategy;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TPOOutput {
    pub strategy: Strategy,
    pub packing: ExtPacking,
    pub config: TPOConfig,
}
