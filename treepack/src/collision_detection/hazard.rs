use std::sync::Arc;

use crate::entities::PlacedShape;
use crate::geometry::primitives::SPolygon;

/// Any placed shape which a candidate must not overlap.
#[derive(Clone, Debug)]
pub struct Hazard {
    /// Id of the placed shape this hazard originates from
    pub id: usize,
    /// The shape of the hazard, shared with the placed shape
    pub shape: Arc<SPolygon>,
}

impl From<&PlacedShape> for Hazard {
    fn from(ps: &PlacedShape) -> Self {
        Hazard {
            id: ps.id,
            shape: ps.shape.clone(),
        }
    }
}
