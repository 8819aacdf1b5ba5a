//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

use itertools::Itertools;
use log::error;

use crate::entities::{Layout, Packing, Placement, ShapeTemplate, bounding_box};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::SPolygon;

pub fn placement_matches_shape(
    template: &ShapeTemplate,
    placement: &Placement,
    shape: &SPolygon,
) -> bool {
    template.materialize(&placement.d_transf) == *shape
}

pub fn layout_bbox_is_consistent(layout: &Layout) -> bool {
    layout.bbox() == bounding_box(layout.placed_shapes())
}

/// No two placed shapes of the packing overlap
pub fn packing_is_collision_free(packing: &Packing) -> bool {
    let collisions = packing
        .placed_shapes()
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a.shape.collides_with(b.shape.as_ref()))
        .map(|(a, b)| (a.id, b.id))
        .collect_vec();

    for (a, b) in collisions.iter() {
        error!("placed shapes #{a} and #{b} overlap");
    }
    collisions.is_empty()
}

/// Ids are unique, at least 1 and increase in placement order
pub fn packing_ids_are_increasing(packing: &Packing) -> bool {
    packing.placed_shapes().first().is_none_or(|ps| ps.id >= 1)
        && packing
            .placed_shapes()
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.id < b.id)
}

/// Every vertex of every placed shape lies within the bounding box of the packing
pub fn packing_bbox_encloses_all_vertices(packing: &Packing) -> bool {
    match packing.bbox() {
        None => packing.is_empty(),
        Some(bbox) => packing
            .placed_shapes()
            .iter()
            .flat_map(|ps| ps.shape.vertices.iter())
            .all(|p| bbox.collides_with(p)),
    }
}
