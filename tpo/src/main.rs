use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tpo::config::TPOConfig;
use tpo::io::cli::Cli;
use tpo::io::output::TPOOutput;
use tpo::io::packing_to_svg::packing_to_svg;
use tpo::opt::run_packing;
use tpo::{EPOCH, io};
use treepack::io::export::export_packing;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            TPOConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(seed) = args.prng_seed {
        config.prng_seed = Some(seed);
    }

    info!("Successfully parsed TPOConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let packing = run_packing(args.n_trees, args.strategy, &config, rng)?;
    let stem = format!("sol_{}_{}", args.strategy, args.n_trees);

    {
        let output = TPOOutput {
            strategy: args.strategy,
            packing: export_packing(&packing),
            config,
        };
        let solution_path = args.solution_folder.join(format!("{stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = args.solution_folder.join(format!("{stem}.svg"));
        let svg = packing_to_svg(&packing, config.svg_draw_options, &args.strategy.to_string());
        io::write_svg(&svg, &svg_path)?;
    }

    match packing.is_empty() {
        true => warn!("[MAIN] no trees were placed, skipping csv export"),
        false => {
            io::write_csv(&packing, &args.solution_folder)?;
        }
    }

    info!(
        "[MAIN] finished in {:.3}s",
        EPOCH.elapsed().as_secs_f64()
    );
    Ok(())
}
