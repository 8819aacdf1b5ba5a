use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::opt::Strategy;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of trees to pack, between 1 and 200
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    pub n_trees: usize,
    #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
    pub strategy: Strategy,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the seed of the config file
    #[arg(short, long, value_name = "SEED")]
    pub prng_seed: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
