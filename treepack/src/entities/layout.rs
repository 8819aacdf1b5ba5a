use std::sync::Arc;

use crate::collision_detection::CollisionIndex;
use crate::entities::{Packing, PlacedShape, Placement, ShapeTemplate, bounding_box};
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Rect, SPolygon};
use crate::util::assertions;

/// A packing under construction.
/// Shapes can only be added. Each layout maintains a [`CollisionIndex`] to check candidates
/// before they are placed, and a running bounding box so the box size after a hypothetical
/// addition is known without revisiting every placed shape.
#[derive(Clone, Debug)]
pub struct Layout {
    template: ShapeTemplate,
    placed_shapes: Vec<PlacedShape>,
    cde: CollisionIndex,
    bbox: Option<Rect>,
}

impl Layout {
    pub fn new(template: ShapeTemplate) -> Self {
        Layout {
            template,
            placed_shapes: vec![],
            cde: CollisionIndex::new(),
            bbox: None,
        }
    }

    /// Checks whether a materialized candidate overlaps none of the placed shapes.
    pub fn is_admissible(&self, shape: &SPolygon) -> bool {
        !self.cde.collides(shape)
    }

    /// Adds a shape to the layout. The caller is responsible for checking admissibility first.
    pub fn place(&mut self, placement: Placement) -> &PlacedShape {
        let shape = self.template.materialize(&placement.d_transf);
        self.place_materialized(placement, shape)
    }

    /// Same as [`Self::place`], for a candidate whose polygon has already been computed.
    pub fn place_materialized(&mut self, placement: Placement, shape: SPolygon) -> &PlacedShape {
        debug_assert!(
            assertions::placement_matches_shape(&self.template, &placement, &shape),
            "shape does not match placement {placement}"
        );
        debug_assert!(
            self.is_admissible(&shape),
            "placement {placement} overlaps a placed shape"
        );

        let ps = PlacedShape::from_shape(placement, Arc::new(shape));
        self.cde.register_hazard((&ps).into());
        self.bbox = Some(self.bbox_with(&ps.shape));
        self.placed_shapes.push(ps);

        debug_assert!(assertions::layout_bbox_is_consistent(self));

        self.placed_shapes.last().expect("shape was just placed")
    }

    /// Side of the enclosing square of the current layout, 0 when empty.
    pub fn bbox_size(&self) -> f64 {
        self.bbox.map_or(0.0, |r| r.square_side())
    }

    /// Side of the enclosing square if `shape` were added to the layout.
    pub fn bbox_size_with(&self, shape: &SPolygon) -> f64 {
        self.bbox_with(shape).square_side()
    }

    fn bbox_with(&self, shape: &SPolygon) -> Rect {
        match self.bbox {
            None => shape.bbox(),
            Some(bbox) => Rect::bounding_rect(bbox, shape.bbox()),
        }
    }

    pub fn bbox(&self) -> Option<Rect> {
        self.bbox
    }

    pub fn template(&self) -> &ShapeTemplate {
        &self.template
    }

    pub fn placed_shapes(&self) -> &[PlacedShape] {
        &self.placed_shapes
    }

    pub fn cde(&self) -> &CollisionIndex {
        &self.cde
    }

    pub fn n_placed(&self) -> usize {
        self.placed_shapes.len()
    }

    /// Finalizes the layout into a [`Packing`], `n_requested` being the number of shapes the caller asked for.
    pub fn into_packing(self, n_requested: usize) -> Packing {
        debug_assert_eq!(self.bbox, bounding_box(&self.placed_shapes));
        Packing::new(self.template, self.placed_shapes, n_requested)
    }
}
