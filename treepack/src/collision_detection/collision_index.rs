use log::trace;

use crate::collision_detection::Hazard;
use crate::entities::{PlacedShape, Placement, ShapeTemplate};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::SPolygon;

/// Keeps the polygons of all accepted shapes and tests candidates against them.
///
/// Polygons are materialized once, when a shape is accepted, and reused for every subsequent query.
/// Queries visit the hazards in placement order and stop at the first overlap.
#[derive(Clone, Debug, Default)]
pub struct CollisionIndex {
    hazards: Vec<Hazard>,
}

impl CollisionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_hazard(&mut self, hazard: Hazard) {
        debug_assert!(
            self.hazards.iter().all(|h| h.id != hazard.id),
            "hazard with id {} already registered",
            hazard.id
        );
        self.hazards.push(hazard);
    }

    /// Returns the first hazard `shape` overlaps with, if any.
    pub fn detect_first(&self, shape: &SPolygon) -> Option<&Hazard> {
        self.hazards
            .iter()
            .find(|h| h.shape.as_ref().collides_with(shape))
    }

    /// Checks whether `shape` overlaps any registered hazard.
    pub fn collides(&self, shape: &SPolygon) -> bool {
        match self.detect_first(shape) {
            Some(h) => {
                trace!("collision with hazard #{}", h.id);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }
}

/// Checks whether `candidate` can be added to `placed` without overlapping any of its shapes.
/// The candidate is materialized once; the placed shapes reuse their cached polygons.
pub fn is_admissible(template: &ShapeTemplate, candidate: &Placement, placed: &[PlacedShape]) -> bool {
    let shape = template.materialize(&candidate.d_transf);
    !placed
        .iter()
        .any(|ps| ps.shape.as_ref().collides_with(&shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DTransformation;

    fn placed(template: &ShapeTemplate, id: usize, r: f64, x: f64, y: f64) -> PlacedShape {
        PlacedShape::new(template, Placement::new(id, r, (x, y)))
    }

    #[test]
    fn empty_index_admits_anything() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        let index = CollisionIndex::new();
        assert!(index.is_empty());
        assert!(!index.collides(&template.materialize(&DTransformation::empty())));
        assert!(is_admissible(&template, &Placement::new(1, 0.0, (0.0, 0.0)), &[]));
    }

    #[test]
    fn reports_first_overlapping_hazard() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        let shapes = vec![
            placed(&template, 1, 0.0, 100.0, 100.0),
            placed(&template, 2, 0.0, 0.0, 0.0),
            placed(&template, 3, 45.0, 4.0, 0.0),
        ];
        let mut index = CollisionIndex::new();
        shapes.iter().for_each(|ps| index.register_hazard(ps.into()));
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());

        let candidate = template.materialize(&DTransformation::new(0.0, (2.0, 0.0)));
        assert_eq!(index.detect_first(&candidate).map(|h| h.id), Some(2));
        assert!(index.collides(&candidate));
        assert!(!is_admissible(
            &template,
            &Placement::new(4, 0.0, (2.0, 0.0)),
            &shapes
        ));
    }

    #[test]
    fn index_agrees_with_uncached_check() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        let shapes = vec![
            placed(&template, 1, 0.0, 0.0, 0.0),
            placed(&template, 2, 180.0, 20.0, 0.0),
        ];
        let mut index = CollisionIndex::new();
        shapes.iter().for_each(|ps| index.register_hazard(ps.into()));

        for x in (-40..=40).step_by(4) {
            for r in [0.0, 90.0, 225.0] {
                let candidate = Placement::new(3, r, (x as f64, 10.0));
                let shape = template.materialize(&candidate.d_transf);
                assert_eq!(
                    !index.collides(&shape),
                    is_admissible(&template, &candidate, &shapes),
                    "{candidate}"
                );
            }
        }
    }
}
