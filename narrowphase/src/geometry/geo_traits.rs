use crate::collision::CollisionResult;
use crate::geometry::primitives::{Interval, Vector2};

/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Shapes that merely touch are not considered to be colliding.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives. Will be 0 in case of a collision.
    fn distance_to(&self, other: &T) -> f32;

    /// Squared version of [DistanceTo::distance_to]
    fn sq_distance_to(&self, other: &T) -> f32;
}

/// Trait for shapes that can be projected onto a 1D axis.
pub trait ProjectOnto {
    /// Projects the shape onto `axis` and returns the covered [`Interval`].
    /// `axis` is expected to be either a unit vector or the zero vector.
    fn project_onto(&self, axis: Vector2) -> Interval;
}

/// Trait for types that can compute how to separate `Self` from `T`.
///
/// Every displacement in the resulting manifest is the vector to add to the position
/// of the corresponding shape to separate it from the other one.
pub trait Separation<T>: CollidesWith<T> {
    type Manifest;

    /// Returns whether `self` and `other` collide, and if so, the minimum translation manifest.
    /// [`CollisionResult::collision`] always agrees with [`CollidesWith::collides_with`].
    fn separation(&self, other: &T) -> CollisionResult<Self::Manifest>;
}
