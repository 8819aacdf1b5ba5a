use itertools::Itertools;

use crate::entities::{Packing, PlacedShape, ShapeTemplate};
use crate::io::ext_repr::{ExtPacking, ExtPlacedShape, ExtSPolygon};

/// Exports a [`Packing`] by composing an [`ExtPacking`] from it.
pub fn export_packing(packing: &Packing) -> ExtPacking {
    ExtPacking {
        template: export_template(packing.template()),
        n_requested: packing.n_requested(),
        n_placed: packing.n_placed(),
        bbox_size: packing.bbox_size(),
        score: packing.score(),
        density: packing.density(),
        placed_shapes: packing
            .placed_shapes()
            .iter()
            .map(export_placed_shape)
            .collect_vec(),
    }
}

pub fn export_placed_shape(ps: &PlacedShape) -> ExtPlacedShape {
    ExtPlacedShape {
        id: ps.id,
        x: round_coord(ps.x()),
        y: round_coord(ps.y()),
        deg: ps.rotation(),
    }
}

pub fn export_template(template: &ShapeTemplate) -> ExtSPolygon {
    ExtSPolygon(template.vertices().iter().map(|&p| p.into()).collect_vec())
}

/// Rounds a coordinate to the nearest integer, halves away from zero.
/// Integer conversion also maps `-0.0` to `0`.
pub fn round_coord(v: f64) -> i64 {
    v.round() as i64
}
