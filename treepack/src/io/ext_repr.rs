use serde::{Deserialize, Serialize};

/// External representation of a [`PlacedShape`](crate::entities::PlacedShape).
/// Coordinates are rounded to whole units, as they appear in the tabular export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedShape {
    /// Identifier of the shape, starting from 1
    pub id: usize,
    pub x: i64,
    pub y: i64,
    /// Rotation in degrees
    pub deg: f64,
}

/// External representation of a [`SPolygon`](crate::geometry::primitives::SPolygon).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSPolygon(pub Vec<(f64, f64)>);

/// External representation of a [`Packing`](crate::entities::Packing).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPacking {
    /// The polygon every placed shape is a copy of, in local coordinates
    pub template: ExtSPolygon,
    pub n_requested: usize,
    pub n_placed: usize,
    /// Side of the smallest axis-aligned square enclosing all placed shapes
    pub bbox_size: f64,
    /// Not present when nothing was placed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<f64>,
    pub density: f64,
    pub placed_shapes: Vec<ExtPlacedShape>,
}
