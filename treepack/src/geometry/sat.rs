//! Overlap test between two polygons based on the [Separating Axis Theorem](https://en.wikipedia.org/wiki/Hyperplane_separation_theorem).
//!
//! Every edge normal of both polygons is tried as a separating axis.
//! Projections that only touch (`max_a == min_b`) count as separated, so polygons sharing
//! an edge or a vertex do not overlap.
//!
//! The projections use all vertices, so for non-convex polygons the test effectively
//! compares convex hulls along the polygons' own edge normals.
//! It can then report an overlap for polygons which are in fact apart, never the reverse.

use crate::geometry::primitives::SPolygon;

/// Returns `true` if the interiors of `a` and `b` intersect.
pub fn overlaps(a: &SPolygon, b: &SPolygon) -> bool {
    !has_separating_axis(a, b) && !has_separating_axis(b, a)
}

/// Searches the edge normals of `source` for an axis on which the projections of `source` and `other` are disjoint.
fn has_separating_axis(source: &SPolygon, other: &SPolygon) -> bool {
    source
        .edge_iter()
        .filter_map(|edge| edge.normal())
        .any(|axis| {
            let (min_s, max_s) = project(source, axis);
            let (min_o, max_o) = project(other, axis);
            max_s <= min_o || max_o <= min_s
        })
}

/// Interval covered by the polygon projected onto `axis`
fn project(poly: &SPolygon, axis: (f64, f64)) -> (f64, f64) {
    poly.vertices
        .iter()
        .map(|p| p.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), proj| {
            (min.min(proj), max.max(proj))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ShapeTemplate;
    use crate::geometry::DTransformation;
    use crate::geometry::geo_traits::{Shape, Transformable};
    use crate::geometry::primitives::Point;
    use crate::geometry::Transformation;
    use itertools::Itertools;
    use test_case::test_case;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> SPolygon {
        SPolygon::new(vec![
            Point(x_min, y_min),
            Point(x_max, y_min),
            Point(x_max, y_max),
            Point(x_min, y_max),
        ])
        .unwrap()
    }

    #[test_case(rect(0.0, 0.0, 2.0, 2.0), rect(1.0, 1.0, 3.0, 3.0), true; "partial overlap")]
    #[test_case(rect(0.0, 0.0, 4.0, 4.0), rect(1.0, 1.0, 2.0, 2.0), true; "containment")]
    #[test_case(rect(0.0, 0.0, 2.0, 2.0), rect(3.0, 0.0, 5.0, 2.0), false; "apart")]
    #[test_case(rect(0.0, 0.0, 2.0, 2.0), rect(2.0, 0.0, 4.0, 2.0), false; "shared edge")]
    #[test_case(rect(0.0, 0.0, 2.0, 2.0), rect(2.0, 2.0, 4.0, 4.0), false; "shared corner")]
    fn rectangles(a: SPolygon, b: SPolygon, expected: bool) {
        assert_eq!(overlaps(&a, &b), expected);
        assert_eq!(overlaps(&b, &a), expected);
    }

    #[test]
    fn diamond_near_square_corner_is_separated_by_diamond_axis() {
        //bounding boxes intersect, only a diagonal axis of the diamond separates these two
        let square = rect(0.0, 0.0, 2.0, 2.0);
        let diamond = SPolygon::new(vec![
            Point(2.9, 1.4),
            Point(4.4, 2.9),
            Point(2.9, 4.4),
            Point(1.4, 2.9),
        ])
        .unwrap();
        assert!(!overlaps(&square, &diamond));
        assert!(!overlaps(&diamond, &square));
    }

    fn tree_placements() -> Vec<DTransformation> {
        let rotations = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
        let offsets = [-20.0, -9.0, 0.0, 7.0, 16.0];
        rotations
            .iter()
            .cartesian_product(offsets.iter().cartesian_product(offsets.iter()))
            .map(|(r, (x, y))| DTransformation::new(*r, (*x, *y)))
            .collect()
    }

    #[test]
    fn symmetric() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        let polys = tree_placements()
            .iter()
            .map(|dt| template.materialize(dt))
            .collect_vec();
        for (a, b) in polys.iter().tuple_combinations() {
            assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn identical_copy_overlaps() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        for dt in tree_placements() {
            let a = template.materialize(&dt);
            let b = template.materialize(&dt);
            assert!(overlaps(&a, &b), "{dt}");
        }
    }

    #[test]
    fn far_copy_never_overlaps() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        for dt in tree_placements() {
            let a = template.materialize(&dt);
            let extent = a.bbox().square_side();
            for dir in [(1.0, 0.0), (0.0, -1.0), (-0.6, 0.8)] {
                let far = 2.5 * extent;
                let b = a.transform_clone(&Transformation::from_translation((
                    dir.0 * far,
                    dir.1 * far,
                )));
                assert!(!overlaps(&a, &b), "{dt}, dir {dir:?}");
            }
        }
    }

    #[test]
    fn trees_side_by_side_touch_without_overlap() {
        //base corners of two upright trees meet at (8, 0)
        let template = ShapeTemplate::tree(1.0).unwrap();
        let a = template.materialize(&DTransformation::new(0.0, (0.0, 0.0)));
        let b = template.materialize(&DTransformation::new(0.0, (16.0, 0.0)));
        assert!(!overlaps(&a, &b));

        let c = template.materialize(&DTransformation::new(0.0, (15.0, 0.0)));
        assert!(overlaps(&a, &c));
    }
}
