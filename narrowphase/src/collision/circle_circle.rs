use crate::collision::{CollisionResult, PairManifest};
use crate::geometry::geo_traits::{CollidesWith, Separation};
use crate::geometry::primitives::Circle;
use crate::util::assertions;

impl Separation<Circle> for Circle {
    type Manifest = PairManifest;

    fn separation(&self, other: &Circle) -> CollisionResult<PairManifest> {
        let between = other.center - self.center;
        let r_sum = self.extent() + other.extent();
        if between.length_sq() >= r_sum * r_sum {
            return CollisionResult::none();
        }
        debug_assert!(self.collides_with(other));

        //coincident centers have no direction to push in: unit() yields the zero vector
        let penetration = r_sum - between.length();
        let manifest = PairManifest::pushing_right_by(between.unit() * penetration);
        debug_assert!(assertions::pair_manifest_is_opposite(&manifest));
        CollisionResult::colliding(manifest)
    }
}
