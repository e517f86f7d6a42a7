use crate::error::ShapeError;
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Edge, Vector2};

/// Line segment swept by a disc of `radius`
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Capsule {
    pub segment: Edge,
    pub radius: f32,
}

impl Capsule {
    pub const N_POINTS: usize = 2;

    /// Creates a capsule, rejecting non-finite endpoints or radius.
    /// A zero-length segment is accepted and turns the capsule into a circle.
    pub fn try_new(start: Vector2, end: Vector2, radius: f32) -> Result<Self, ShapeError> {
        let start = Vector2::try_new(start.0, start.1)?;
        let end = Vector2::try_new(end.0, end.1)?;
        if !radius.is_finite() {
            return Err(ShapeError::NonFinite {
                what: "capsule radius",
                value: radius,
            });
        }
        Ok(Capsule {
            segment: Edge::new(start, end),
            radius,
        })
    }

    /// Creates a capsule from a slice which must contain exactly two points.
    pub fn try_from_points(points: &[Vector2], radius: f32) -> Result<Self, ShapeError> {
        match points {
            [start, end] => Capsule::try_new(*start, *end, radius),
            _ => Err(ShapeError::PointCount {
                shape: "capsule",
                expected: Self::N_POINTS,
                found: points.len(),
            }),
        }
    }

    /// Radius as used by every collision test, a negative radius acts as its absolute value
    #[inline(always)]
    pub fn extent(&self) -> f32 {
        self.radius.abs()
    }

    /// Smallest distance from an endpoint of either core segment to the other core segment.
    /// Segments that cross away from their endpoints are not detected by this measure.
    pub fn endpoint_distance(&self, other: &Capsule) -> f32 {
        [
            self.segment.sq_distance_to(&other.segment.start),
            self.segment.sq_distance_to(&other.segment.end),
            other.segment.sq_distance_to(&self.segment.start),
            other.segment.sq_distance_to(&self.segment.end),
        ]
        .into_iter()
        .fold(f32::INFINITY, f32::min)
        .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_two_points() {
        let err = Capsule::try_from_points(&[Vector2::ZERO], 1.0).unwrap_err();
        assert_eq!(
            err,
            ShapeError::PointCount {
                shape: "capsule",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn endpoint_distance() {
        let a = Capsule::try_new(Vector2(2.0, -2.0), Vector2(2.0, 2.0), 3.0).unwrap();
        let b = Capsule::try_new(Vector2(4.0, -2.0), Vector2(4.0, 2.0), 2.0).unwrap();
        assert_eq!(a.endpoint_distance(&b), 2.0);
        assert_eq!(b.endpoint_distance(&a), 2.0);
    }

    #[test]
    fn endpoint_distance_of_crossing_segments() {
        let a = Capsule::try_new(Vector2(-5.0, 0.0), Vector2(5.0, 0.0), 0.1).unwrap();
        let b = Capsule::try_new(Vector2(0.0, -5.0), Vector2(0.0, 5.0), 0.1).unwrap();
        assert_eq!(a.endpoint_distance(&b), 5.0);
    }

    #[test]
    fn endpoint_on_the_other_segment() {
        let a = Capsule::try_new(Vector2(-5.0, 0.0), Vector2(5.0, 0.0), 1.0).unwrap();
        let b = Capsule::try_new(Vector2(1.0, 0.0), Vector2(1.0, 5.0), 1.0).unwrap();
        assert_eq!(a.endpoint_distance(&b), 0.0);
    }
}
