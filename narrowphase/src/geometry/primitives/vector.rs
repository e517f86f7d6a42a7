use std::ops::{Add, Mul, Neg, Sub};

use crate::error::ShapeError;
use crate::geometry::geo_traits::DistanceTo;

/// Geometric primitive representing a 2D vector, used both for positions and displacements
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Vector2(pub f32, pub f32);

impl Vector2 {
    pub const ZERO: Vector2 = Vector2(0.0, 0.0);

    /// Creates a vector, rejecting non-finite components.
    pub fn try_new(x: f32, y: f32) -> Result<Self, ShapeError> {
        if !x.is_finite() {
            return Err(ShapeError::NonFinite {
                what: "vector x",
                value: x,
            });
        }
        if !y.is_finite() {
            return Err(ShapeError::NonFinite {
                what: "vector y",
                value: y,
            });
        }
        Ok(Vector2(x, y))
    }

    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0
    }

    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.1
    }

    /// Squared length, avoids the square root when only comparing magnitudes
    #[inline(always)]
    pub fn length_sq(&self) -> f32 {
        self.0 * self.0 + self.1 * self.1
    }

    /// Computed without intermediate overflow of the squared components
    #[inline(always)]
    pub fn length(&self) -> f32 {
        self.0.hypot(self.1)
    }

    /// Returns the unit vector pointing in the same direction.
    /// The zero vector has no direction and maps onto itself.
    pub fn unit(&self) -> Vector2 {
        //scale by the largest component first, the length of a finite vector can still overflow
        let scale = f32::max(self.0.abs(), self.1.abs());
        if scale == 0.0 {
            return Vector2::ZERO;
        }
        let scaled = Vector2(self.0 / scale, self.1 / scale);
        let magnitude = scaled.length();
        Vector2(scaled.0 / magnitude, scaled.1 / magnitude)
    }

    #[inline(always)]
    pub fn dot(&self, other: Vector2) -> f32 {
        self.0 * other.0 + self.1 * other.1
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0 && self.1 == 0.0
    }
}

impl DistanceTo<Vector2> for Vector2 {
    #[inline(always)]
    fn distance_to(&self, other: &Vector2) -> f32 {
        self.sq_distance_to(other).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, other: &Vector2) -> f32 {
        (*self - *other).length_sq()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2(-self.0, -self.1)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Vector2 {
        Vector2(self.0 * rhs, self.1 * rhs)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from(v: (f32, f32)) -> Self {
        Vector2(v.0, v.1)
    }
}
