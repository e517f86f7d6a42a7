use crate::collision::sat;
use crate::collision::{CollisionResult, PairManifest};
use crate::geometry::geo_traits::{CollidesWith, Separation};
use crate::geometry::primitives::{AABox, Vector2};
use crate::util::assertions;

/// Separating axes of two boxes: the two axes of `left` followed by the two axes of `right`
fn box_box_axes(left: &AABox, right: &AABox) -> [Vector2; 4] {
    let [l1, l2] = left.axes();
    let [r1, r2] = right.axes();
    [l1, l2, r1, r2]
}

impl CollidesWith<AABox> for AABox {
    fn collides_with(&self, other: &AABox) -> bool {
        sat::overlaps_on_all_axes(self, other, &box_box_axes(self, other))
    }
}

impl Separation<AABox> for AABox {
    type Manifest = PairManifest;

    fn separation(&self, other: &AABox) -> CollisionResult<PairManifest> {
        match sat::minimum_translation(self, other, &box_box_axes(self, other)) {
            None => CollisionResult::none(),
            Some(mtv) => {
                let manifest = PairManifest::pushing_right_by(mtv.displacement());
                debug_assert!(assertions::pair_manifest_is_opposite(&manifest));
                CollisionResult::colliding(manifest)
            }
        }
    }
}
