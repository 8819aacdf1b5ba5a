use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;
use treepack::entities::Packing;
use treepack::io::csv::{csv_file_name, csv_string};

use crate::EPOCH;

pub mod cli;
pub mod output;
pub mod packing_to_svg;
pub mod svg_util;

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to {}", canonical(path).display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {}", canonical(path).display());
    Ok(())
}

/// Writes the `id,x,y,deg` export of `packing` into `folder`, returns the path of the written file
pub fn write_csv(packing: &Packing, folder: &Path) -> Result<PathBuf> {
    let csv = csv_string(packing).context("run a packing with at least one placed tree first")?;
    let path = folder.join(csv_file_name(packing));

    fs::write(&path, csv)
        .with_context(|| format!("could not write csv file: {}", path.display()))?;

    info!("csv written to {}", canonical(&path).display());
    Ok(path)
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("epoch: {}", jiff::Timestamp::now());
    Ok(())
}
