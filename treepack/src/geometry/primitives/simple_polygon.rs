use anyhow::{Result, ensure};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable, TransformableFrom};
use crate::geometry::primitives::{Edge, Point, Rect};
use crate::geometry::sat;

/// Geometric primitive representing a simple polygon: <https://en.wikipedia.org/wiki/Simple_polygon>
///
/// Vertex order is kept exactly as given, the polygon is implicitly closed (last vertex connects back to the first).
#[derive(Clone, Debug, PartialEq)]
pub struct SPolygon {
    /// Vertices of the polygon, in order
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    pub area: f64,
}

impl SPolygon {
    /// Create a new polygon from a set of points, validation is performed here.
    /// Use [`Self::clone()`] or [`Self::transform()`] to derive new instances without revalidating.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        ensure!(
            vertices.len() >= 3,
            "polygon must have at least 3 vertices, got {}",
            vertices.len()
        );
        ensure!(
            vertices.iter().all(|p| p.is_finite()),
            "polygon contains non-finite vertices: {vertices:?}"
        );
        for i in 0..vertices.len() {
            let j = (i + 1) % vertices.len();
            Edge::new(vertices[i], vertices[j])?;
        }

        let area = SPolygon::calculate_area(&vertices).abs();
        ensure!(area > 0.0, "polygon has no area: {vertices:?}");

        let bbox = Rect::from_points(&vertices).expect("polygon has vertices");

        Ok(SPolygon {
            vertices,
            bbox,
            area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area (in a y-up frame)
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }
}

impl Shape for SPolygon {
    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices,
            bbox,
            area: _,
        } = self;

        vertices.iter_mut().for_each(|p| {
            p.transform(t);
        });

        *bbox = Rect::from_points(vertices.iter()).expect("polygon has vertices");

        self
    }
}

impl TransformableFrom for SPolygon {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let SPolygon {
            vertices,
            bbox,
            area: _,
        } = self;

        debug_assert_eq!(vertices.len(), reference.vertices.len());

        for (p, ref_p) in vertices.iter_mut().zip(&reference.vertices) {
            p.transform_from(ref_p, t);
        }

        *bbox = Rect::from_points(vertices.iter()).expect("polygon has vertices");

        self
    }
}

impl CollidesWith<SPolygon> for SPolygon {
    fn collides_with(&self, other: &SPolygon) -> bool {
        sat::overlaps(self, other)
    }
}
