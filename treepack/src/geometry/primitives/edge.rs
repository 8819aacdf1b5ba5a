use anyhow::Result;
use anyhow::ensure;

use crate::geometry::primitives::Point;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Result<Self> {
        ensure!(start != end, "degenerate edge, {start:?} == {end:?}");
        Ok(Edge { start, end })
    }

    /// Normal of the edge: the direction vector rotated a quarter turn, `(-dy, dx)`.
    /// Not normalized. `None` for a zero-length edge, which has no direction.
    pub fn normal(&self) -> Option<(f64, f64)> {
        let (dx, dy) = (self.end.0 - self.start.0, self.end.1 - self.start.1);
        match dx == 0.0 && dy == 0.0 {
            true => None,
            false => Some((-dy, dx)),
        }
    }
}
