use crate::error::ShapeError;
use crate::geometry::geo_traits::ProjectOnto;
use crate::geometry::primitives::{Edge, Interval, Vector2};

/// Axis-aligned box, represented by its four corners.
///
/// Corners are wound consistently (e.g. clockwise starting top-left), so that edges `[0]→[1]`
/// and `[1]→[2]` are perpendicular. Their directions double as the box's two edge-normals.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct AABox {
    pub corners: [Vector2; 4],
}

impl AABox {
    pub const N_CORNERS: usize = 4;

    /// Creates a box, rejecting non-finite corners.
    pub fn try_new(corners: [Vector2; 4]) -> Result<Self, ShapeError> {
        for c in corners.iter() {
            Vector2::try_new(c.0, c.1)?;
        }
        Ok(AABox { corners })
    }

    /// Creates a box from a slice of points, which must contain exactly four corners.
    pub fn try_from_points(points: &[Vector2]) -> Result<Self, ShapeError> {
        let corners: [Vector2; 4] = points.try_into().map_err(|_| ShapeError::PointCount {
            shape: "box",
            expected: Self::N_CORNERS,
            found: points.len(),
        })?;
        AABox::try_new(corners)
    }

    /// Creates a box from its minimum and maximum corner, wound `(min), (max.x, min.y), (max), (min.x, max.y)`.
    pub fn from_min_max(min: Vector2, max: Vector2) -> Self {
        AABox {
            corners: [min, Vector2(max.0, min.1), max, Vector2(min.0, max.1)],
        }
    }

    /// Unit directions of the edges `[0]→[1]` and `[1]→[2]`, in testing order.
    /// A degenerate edge results in a zero axis.
    pub fn axes(&self) -> [Vector2; 2] {
        let c = &self.corners;
        //halved, the difference of two finite corners can overflow
        [c[1] * 0.5 - c[0] * 0.5, c[2] * 0.5 - c[1] * 0.5].map(|d| d.unit())
    }

    /// Midpoint of the diagonal `[0]→[2]`
    pub fn center(&self) -> Vector2 {
        Edge::new(self.corners[0], self.corners[2]).centroid()
    }

    /// Returns a copy moved by `displacement`.
    pub fn translated(&self, displacement: Vector2) -> Self {
        AABox {
            corners: self.corners.map(|c| c + displacement),
        }
    }
}

impl ProjectOnto for AABox {
    fn project_onto(&self, axis: Vector2) -> Interval {
        let [first, rest @ ..] = self.corners.map(|c| c.dot(axis));
        rest.into_iter()
            .fold(Interval::new(first, first), Interval::expand_to)
    }
}
