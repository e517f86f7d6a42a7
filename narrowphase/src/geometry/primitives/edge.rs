use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::Vector2;

/// Line segment between two points.
/// A degenerate edge (`start == end`) is valid and behaves like a single point.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Vector2,
    pub end: Vector2,
}

impl Edge {
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Edge { start, end }
    }

    /// Vector from `start` to `end`
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the closest point which lies on the edge to the given point
    pub fn closest_point_on_edge(&self, point: &Vector2) -> Vector2 {
        let dir = self.direction();
        let len_sq = dir.length_sq();
        if len_sq == 0.0 {
            return self.start;
        }
        //parameter of the projection of `point` on the supporting line, clamped to the segment
        let t = ((*point - self.start).dot(dir) / len_sq).clamp(0.0, 1.0);
        self.start + dir * t
    }

    /// Midpoint, halved first so the sum of two finite points cannot overflow
    pub fn centroid(&self) -> Vector2 {
        self.start * 0.5 + self.end * 0.5
    }
}

impl DistanceTo<Vector2> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Vector2) -> f32 {
        f32::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Vector2) -> f32 {
        self.closest_point_on_edge(point).sq_distance_to(point)
    }
}
