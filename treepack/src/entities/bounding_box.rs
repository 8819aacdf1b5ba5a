use crate::entities::PlacedShape;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;

/// Axis-aligned rectangle enclosing every vertex of every shape, `None` for no shapes.
pub fn bounding_box<'a>(shapes: impl IntoIterator<Item = &'a PlacedShape>) -> Option<Rect> {
    shapes
        .into_iter()
        .map(|ps| ps.shape.bbox())
        .reduce(Rect::bounding_rect)
}

/// Side length of the smallest axis-aligned square enclosing all shapes.
/// The square is anchored at the shapes' own extents, not at the origin. Zero for no shapes.
pub fn bounding_box_size<'a>(shapes: impl IntoIterator<Item = &'a PlacedShape>) -> f64 {
    bounding_box(shapes).map_or(0.0, |bbox| bbox.square_side())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Placement, ShapeTemplate};
    use crate::util::FPA;

    #[test]
    fn empty_is_zero() {
        let no_shapes: Vec<PlacedShape> = vec![];
        assert_eq!(bounding_box(&no_shapes), None);
        assert_eq!(bounding_box_size(&no_shapes), 0.0);
    }

    #[test]
    fn single_upright_tree() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        let ps = PlacedShape::new(&template, Placement::new(1, 0.0, (10.0, 10.0)));
        assert_eq!(
            bounding_box([&ps]),
            Some(Rect::new(2.0, -6.0, 18.0, 18.0))
        );
        assert_eq!(bounding_box_size([&ps]), 24.0);
    }

    #[test]
    fn wide_row_uses_larger_extent() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        let shapes = (0..4)
            .map(|i| PlacedShape::new(&template, Placement::new(i + 1, 0.0, (20.0 * i as f64, 0.0))))
            .collect::<Vec<_>>();
        //x from -8 to 68
        assert_eq!(FPA(bounding_box_size(&shapes)), FPA(76.0));
    }

    #[test]
    fn adding_a_shape_never_shrinks_the_box() {
        let template = ShapeTemplate::tree(1.0).unwrap();
        let mut shapes: Vec<PlacedShape> = vec![];
        let mut previous = bounding_box_size(&shapes);
        for (i, (r, x, y)) in [
            (0.0, 0.0, 0.0),
            (45.0, 3.0, 2.0),
            (180.0, -20.0, 5.0),
            (90.0, 1.0, 1.0),
            (315.0, 14.0, -14.0),
        ]
        .into_iter()
        .enumerate()
        {
            shapes.push(PlacedShape::new(&template, Placement::new(i + 1, r, (x, y))));
            let size = bounding_box_size(&shapes);
            assert!(size >= previous, "{size} < {previous}");
            previous = size;
        }
    }
}
