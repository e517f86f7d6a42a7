use crate::collision::sat;
use crate::collision::{CircleBoxManifest, CollisionResult};
use crate::geometry::geo_traits::{CollidesWith, Separation};
use crate::geometry::primitives::{AABox, Circle, Vector2};
use crate::util::assertions;

/// Separating axes of a circle and a box: the two axes of the box,
/// followed by the axis from the box's center to the circle's center
fn circle_box_axes(circle: &Circle, aabox: &AABox) -> [Vector2; 3] {
    let [b1, b2] = aabox.axes();
    //halved, the difference of two finite points can overflow
    [b1, b2, (circle.center * 0.5 - aabox.center() * 0.5).unit()]
}

impl CollidesWith<AABox> for Circle {
    fn collides_with(&self, aabox: &AABox) -> bool {
        sat::overlaps_on_all_axes(aabox, self, &circle_box_axes(self, aabox))
    }
}

impl CollidesWith<Circle> for AABox {
    fn collides_with(&self, circle: &Circle) -> bool {
        circle.collides_with(self)
    }
}

impl Separation<AABox> for Circle {
    type Manifest = CircleBoxManifest;

    fn separation(&self, aabox: &AABox) -> CollisionResult<CircleBoxManifest> {
        //the box is the reference: the mtv moves the circle
        match sat::minimum_translation(aabox, self, &circle_box_axes(self, aabox)) {
            None => CollisionResult::none(),
            Some(mtv) => {
                let manifest = CircleBoxManifest::pushing_circle_by(mtv.displacement());
                debug_assert!(assertions::circle_box_manifest_is_opposite(&manifest));
                CollisionResult::colliding(manifest)
            }
        }
    }
}
