use std::fmt::Write;

use anyhow::{Result, ensure};

use crate::entities::Packing;
use crate::io::export::export_placed_shape;

pub const CSV_HEADER: &str = "id,x,y,deg";

/// Renders the placed shapes of a packing as `id,x,y,deg` rows, in placement order.
/// Coordinates are rounded to integers, rotations are printed without a trailing `.0`.
/// Exporting a packing without shapes is refused.
pub fn csv_string(packing: &Packing) -> Result<String> {
    ensure!(!packing.is_empty(), "cannot export a packing without placed shapes");

    let mut out = String::with_capacity(16 * (packing.n_placed() + 1));
    writeln!(out, "{CSV_HEADER}")?;
    for ext in packing.placed_shapes().iter().map(export_placed_shape) {
        writeln!(out, "{},{},{},{}", ext.id, ext.x, ext.y, ext.deg)?;
    }
    Ok(out)
}

/// Default file name of the tabular export, e.g. `trees_50_score_842.csv`.
/// See [`file_name`].
pub fn csv_file_name(packing: &Packing) -> String {
    file_name(packing.n_requested(), packing.score())
}

/// The score is rounded to an integer, halves away from zero. 0 when nothing was placed.
pub fn file_name(n_requested: usize, score: Option<f64>) -> String {
    format!(
        "trees_{}_score_{}.csv",
        n_requested,
        score.unwrap_or(0.0).round()
    )
}
