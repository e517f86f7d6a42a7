use crate::error::ShapeError;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, ProjectOnto};
use crate::geometry::primitives::{Interval, Vector2};

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Vector2,
    pub radius: f32,
}

impl Circle {
    /// Creates a circle, rejecting a non-finite radius.
    /// The check is structural: a negative radius is accepted and acts as its absolute value.
    pub fn try_new(center: Vector2, radius: f32) -> Result<Self, ShapeError> {
        let center = Vector2::try_new(center.0, center.1)?;
        if !radius.is_finite() {
            return Err(ShapeError::NonFinite {
                what: "circle radius",
                value: radius,
            });
        }
        Ok(Circle { center, radius })
    }

    /// Radius as used by every collision test
    #[inline(always)]
    pub fn extent(&self) -> f32 {
        self.radius.abs()
    }

    /// Returns a copy moved by `displacement`.
    pub fn translated(&self, displacement: Vector2) -> Self {
        Circle {
            center: self.center + displacement,
            radius: self.radius,
        }
    }
}

impl ProjectOnto for Circle {
    /// Exact extent of the disc along `axis`.
    fn project_onto(&self, axis: Vector2) -> Interval {
        let c = self.center.dot(axis);
        let r = self.extent() * axis.length();
        Interval::new(c - r, c + r)
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        let r_sum = self.extent() + other.extent();
        r_sum * r_sum > self.center.sq_distance_to(&other.center)
    }
}
