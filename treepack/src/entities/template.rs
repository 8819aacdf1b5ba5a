use anyhow::{Result, ensure};

use crate::geometry::DTransformation;
use crate::geometry::geo_traits::{Shape, Transformable, TransformableFrom};
use crate::geometry::primitives::{Point, Rect, SPolygon};

/// Polygon in local coordinates (unrotated, untranslated) shared by every placed shape of a packing.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeTemplate {
    shape: SPolygon,
}

impl ShapeTemplate {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let shape = SPolygon::new(points)?;
        Ok(Self { shape })
    }

    /// Tree silhouette: a triangle on top of a rectangular trunk.
    /// `scale` 1.0 yields a crown 16 units wide and a total height of 24 units.
    pub fn tree(scale: f64) -> Result<Self> {
        ensure!(
            scale.is_finite() && scale > 0.0,
            "tree scale must be strictly positive, got {scale}"
        );
        let k = 8.0 * scale;
        Self::new(vec![
            Point(0.0, -2.0 * k),
            Point(-k, 0.0),
            Point(-0.4 * k, 0.0),
            Point(-0.4 * k, k),
            Point(0.4 * k, k),
            Point(0.4 * k, 0.0),
            Point(k, 0.0),
        ])
    }

    /// World-space polygon of the template under `d_transf`: every vertex is rotated, then translated.
    pub fn materialize(&self, d_transf: &DTransformation) -> SPolygon {
        self.shape.transform_clone(&d_transf.compose())
    }

    /// Same as [`Self::materialize`], but writes the result into `buffer` to avoid an allocation.
    /// `buffer` must have been created from this template.
    pub fn materialize_into(&self, buffer: &mut SPolygon, d_transf: &DTransformation) {
        buffer.transform_from(&self.shape, &d_transf.compose());
    }

    pub fn vertices(&self) -> &[Point] {
        &self.shape.vertices
    }

    pub fn shape(&self) -> &SPolygon {
        &self.shape
    }

    pub fn area(&self) -> f64 {
        self.shape.area()
    }

    /// Bounding box of the template in local coordinates
    pub fn bbox(&self) -> Rect {
        self.shape.bbox()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FPA;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn default_tree_dimensions() {
        let tree = ShapeTemplate::tree(1.0).unwrap();
        assert_eq!(tree.vertices().len(), 7);
        assert_eq!(tree.bbox(), Rect::new(-8.0, -16.0, 8.0, 8.0));
        //crown 16 * 16 / 2 plus trunk 6.4 * 8
        assert!((tree.area() - (128.0 + 51.2)).abs() < 1e-9);
    }

    #[test]
    fn invalid_scale() {
        assert!(ShapeTemplate::tree(0.0).is_err());
        assert!(ShapeTemplate::tree(-1.0).is_err());
        assert!(ShapeTemplate::tree(f64::NAN).is_err());
    }

    #[test]
    fn materialize_rotates_then_translates() {
        let tree = ShapeTemplate::tree(1.0).unwrap();
        let dt = DTransformation::new(45.0, (5.0, -3.0));
        let poly = tree.materialize(&dt);
        for (world, local) in poly.vertices.iter().zip(tree.vertices()) {
            let expected = local.rotate(45.0);
            assert_eq!(FPA(world.0), FPA(expected.0 + 5.0));
            assert_eq!(FPA(world.1), FPA(expected.1 - 3.0));
        }
        //tip (0, -16) rotated by 45 degrees
        assert_eq!(FPA(poly.vertex(0).0), FPA(16.0 * FRAC_1_SQRT_2 + 5.0));
    }

    #[test]
    fn rotation_is_periodic() {
        let tree = ShapeTemplate::tree(1.0).unwrap();
        for r in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 12.5] {
            let a = tree.materialize(&DTransformation::new(r, (7.0, 11.0)));
            let b = tree.materialize(&DTransformation::new(r + 360.0, (7.0, 11.0)));
            for (pa, pb) in a.vertices.iter().zip(&b.vertices) {
                assert!((pa.0 - pb.0).abs() < 1e-9, "{r}: {pa:?} vs {pb:?}");
                assert!((pa.1 - pb.1).abs() < 1e-9, "{r}: {pa:?} vs {pb:?}");
            }
        }
    }

    #[test]
    fn materialize_into_matches_materialize() {
        let tree = ShapeTemplate::tree(1.5).unwrap();
        let mut buffer = tree.shape().clone();
        for dt in [
            DTransformation::new(90.0, (20.0, 0.0)),
            DTransformation::new(315.0, (-14.0, 14.0)),
        ] {
            tree.materialize_into(&mut buffer, &dt);
            assert_eq!(buffer, tree.materialize(&dt));
        }
    }
}
