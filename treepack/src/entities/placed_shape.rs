use std::fmt::Display;
use std::sync::Arc;

use crate::entities::ShapeTemplate;
use crate::geometry::DTransformation;
use crate::geometry::primitives::SPolygon;

/// Candidate position of a shape: its id and where it would go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Identifier of the shape, starting from 1
    pub id: usize,
    pub d_transf: DTransformation,
}

impl Placement {
    pub fn new(id: usize, rotation: f64, (x, y): (f64, f64)) -> Self {
        Self {
            id,
            d_transf: DTransformation::new(rotation, (x, y)),
        }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} [{}]", self.id, self.d_transf)
    }
}

/// Represents a [`Placement`] that has been accepted into a layout.
/// Never modified after acceptance.
#[derive(Clone, Debug)]
pub struct PlacedShape {
    pub id: usize,
    pub d_transf: DTransformation,
    /// The template after it has been transformed and placed
    pub shape: Arc<SPolygon>,
}

impl PlacedShape {
    pub fn new(template: &ShapeTemplate, placement: Placement) -> Self {
        let shape = Arc::new(template.materialize(&placement.d_transf));
        Self::from_shape(placement, shape)
    }

    /// Wraps an already materialized polygon, avoids transforming the template a second time
    pub fn from_shape(placement: Placement, shape: Arc<SPolygon>) -> Self {
        Self {
            id: placement.id,
            d_transf: placement.d_transf,
            shape,
        }
    }

    pub fn x(&self) -> f64 {
        self.d_transf.translation().0
    }

    pub fn y(&self) -> f64 {
        self.d_transf.translation().1
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f64 {
        self.d_transf.rotation()
    }

    pub fn placement(&self) -> Placement {
        Placement {
            id: self.id,
            d_transf: self.d_transf,
        }
    }
}
