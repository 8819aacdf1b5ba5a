use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Point;

/// Geometric primitive representing an axis-aligned rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "invalid Rect, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest rectangle enclosing all `points`, `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Rect>, p| {
            Some(match acc {
                None => Rect::new(p.0, p.1, p.0, p.1),
                Some(r) => Rect::new(
                    r.x_min.min(p.0),
                    r.y_min.min(p.1),
                    r.x_max.max(p.0),
                    r.y_max.max(p.1),
                ),
            })
        })
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: a.x_min.min(b.x_min),
            y_min: a.y_min.min(b.y_min),
            x_max: a.x_max.max(b.x_max),
            y_max: a.y_max.max(b.y_max),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Side length of the smallest axis-aligned square containing the rectangle
    pub fn square_side(&self) -> f64 {
        f64::max(self.width(), self.height())
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.width() * factor - self.width()) / 2.0;
        let dy = (self.height() * factor - self.height()) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }
}

impl Shape for Rect {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn bbox(&self) -> Rect {
        *self
    }
}

impl CollidesWith<Point> for Rect {
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_tracks_extremes() {
        let pts = [Point(1.0, -2.0), Point(-3.0, 4.0), Point(0.5, 0.5)];
        let r = Rect::from_points(&pts).unwrap();
        assert_eq!(r, Rect::new(-3.0, -2.0, 1.0, 4.0));
        assert_eq!(r.square_side(), 6.0);
        assert!(pts.iter().all(|p| r.collides_with(p)));
    }

    #[test]
    fn from_no_points_is_none() {
        let no_points: [Point; 0] = [];
        assert_eq!(Rect::from_points(&no_points), None);
    }

    #[test]
    fn scale_keeps_center() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0);
        let s = r.scale(1.5);
        assert_eq!((s.x_min + s.x_max) / 2.0, 5.0);
        assert_eq!((s.y_min + s.y_max) / 2.0, 2.0);
        assert_eq!(s.width(), 15.0);
        assert_eq!(s.height(), 6.0);
    }
}
