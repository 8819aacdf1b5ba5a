use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Transformable, TransformableFrom};

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Transformable for Point {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Point(x, y) = self;
        let (tx, ty) = TRANSFORM_FORMULA(*x, *y, t);
        *x = tx;
        *y = ty;
        self
    }
}

impl TransformableFrom for Point {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let Point(x, y) = self;
        let (tx, ty) = TRANSFORM_FORMULA(reference.0, reference.1, t);
        *x = tx;
        *y = ty;
        self
    }
}

const TRANSFORM_FORMULA: fn(f64, f64, &Transformation) -> (f64, f64) = |x, y, t| -> (f64, f64) {
    let m = t.matrix();

    let t_x = m[0][0].into_inner() * x + m[0][1].into_inner() * y + m[0][2].into_inner();
    let t_y = m[1][0].into_inner() * x + m[1][1].into_inner() * y + m[1][2].into_inner();

    (t_x, t_y)
};

impl Point {
    /// Rotates the point around the origin, `angle` in degrees (counterclockwise in a y-up frame).
    pub fn rotate(self, angle: f64) -> Point {
        let (sin, cos) = angle.to_radians().sin_cos();
        let Point(x, y) = self;
        Point(x * cos - y * sin, x * sin + y * cos)
    }

    /// Dot product with a direction vector
    pub fn dot(&self, (ax, ay): (f64, f64)) -> f64 {
        self.0 * ax + self.1 * ay
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FPA;
    use test_case::test_case;

    #[test_case(Point(1.0, 0.0), 90.0, Point(0.0, 1.0); "quarter turn")]
    #[test_case(Point(1.0, 0.0), 180.0, Point(-1.0, 0.0); "half turn")]
    #[test_case(Point(3.0, -2.0), 0.0, Point(3.0, -2.0); "identity")]
    #[test_case(Point(0.0, -16.0), 45.0, Point(16.0 * std::f64::consts::FRAC_1_SQRT_2, -16.0 * std::f64::consts::FRAC_1_SQRT_2); "tree tip at 45 degrees")]
    fn rotate_about_origin(p: Point, angle: f64, expected: Point) {
        let r = p.rotate(angle);
        assert_eq!(FPA(r.0), FPA(expected.0), "x: {r:?} vs {expected:?}");
        assert_eq!(FPA(r.1), FPA(expected.1), "y: {r:?} vs {expected:?}");
    }

    #[test]
    fn rotation_matches_matrix_transform() {
        let p = Point(-3.2, 8.0);
        let angles: [f64; 5] = [0.0, 45.0, 135.0, 270.0, 33.3];
        for angle in angles {
            let via_matrix = p.transform_clone(&Transformation::from_rotation(angle.to_radians()));
            let direct = p.rotate(angle);
            assert_eq!(FPA(via_matrix.0), FPA(direct.0));
            assert_eq!(FPA(via_matrix.1), FPA(direct.1));
        }
    }
}
