use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::{Capsule, Circle};

impl CollidesWith<Capsule> for Capsule {
    /// True if an endpoint of either core segment lies closer than the combined radius to the other segment.
    fn collides_with(&self, other: &Capsule) -> bool {
        self.endpoint_distance(other) < self.extent() + other.extent()
    }
}

impl CollidesWith<Circle> for Capsule {
    fn collides_with(&self, circle: &Circle) -> bool {
        self.segment.distance_to(&circle.center) < self.extent() + circle.extent()
    }
}

impl CollidesWith<Capsule> for Circle {
    fn collides_with(&self, capsule: &Capsule) -> bool {
        capsule.collides_with(self)
    }
}
