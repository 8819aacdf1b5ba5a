use crate::entities::{PlacedShape, ShapeTemplate, bounding_box};
use crate::geometry::primitives::Rect;
use crate::scoring;

/// Result of a packing run: the accepted shapes in placement order and the metrics derived from them.
///
/// Strategies may fail to place some of the requested shapes, `n_requested` keeps track of how many were asked for.
#[derive(Clone, Debug)]
pub struct Packing {
    template: ShapeTemplate,
    placed_shapes: Vec<PlacedShape>,
    n_requested: usize,
    bbox: Option<Rect>,
}

impl Packing {
    pub fn new(template: ShapeTemplate, placed_shapes: Vec<PlacedShape>, n_requested: usize) -> Self {
        let bbox = bounding_box(&placed_shapes);
        Self {
            template,
            placed_shapes,
            n_requested,
            bbox,
        }
    }

    pub fn template(&self) -> &ShapeTemplate {
        &self.template
    }

    /// Placed shapes, in the order they were placed
    pub fn placed_shapes(&self) -> &[PlacedShape] {
        &self.placed_shapes
    }

    /// Rectangle enclosing all placed shapes
    pub fn bbox(&self) -> Option<Rect> {
        self.bbox
    }

    /// Side of the smallest axis-aligned square enclosing all placed shapes
    pub fn bbox_size(&self) -> f64 {
        self.bbox.map_or(0.0, |r| r.square_side())
    }

    /// See [`scoring::score`], `None` if nothing was placed
    pub fn score(&self) -> Option<f64> {
        scoring::score(self.bbox_size(), self.n_placed())
    }

    /// Fraction of the enclosing square covered by shapes
    pub fn density(&self) -> f64 {
        let side = self.bbox_size();
        match side > 0.0 {
            true => self.n_placed() as f64 * self.template.area() / (side * side),
            false => 0.0,
        }
    }

    pub fn n_placed(&self) -> usize {
        self.placed_shapes.len()
    }

    pub fn n_requested(&self) -> usize {
        self.n_requested
    }

    /// Number of requested shapes for which no admissible position was found
    pub fn n_missing(&self) -> usize {
        self.n_requested.saturating_sub(self.n_placed())
    }

    pub fn is_complete(&self) -> bool {
        self.n_missing() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.placed_shapes.is_empty()
    }
}
