use crate::collision::{CircleBoxManifest, CollisionResult, PairManifest};
use crate::geometry::primitives::Vector2;
use crate::io::ext_repr::{ExtCircleBoxManifest, ExtCollisionResult, ExtPairManifest, ExtVector};

impl From<Vector2> for ExtVector {
    fn from(v: Vector2) -> Self {
        ExtVector { x: v.0, y: v.1 }
    }
}

impl From<PairManifest> for ExtPairManifest {
    fn from(m: PairManifest) -> Self {
        ExtPairManifest {
            left_distance: m.left_distance.into(),
            right_distance: m.right_distance.into(),
        }
    }
}

impl From<CircleBoxManifest> for ExtCircleBoxManifest {
    fn from(m: CircleBoxManifest) -> Self {
        ExtCircleBoxManifest {
            circle_distance: m.circle_distance.into(),
            box_distance: m.box_distance.into(),
        }
    }
}

/// Converts a [`CollisionResult`] into its external representation, exporting the manifest if present.
pub fn export_result<M, E>(result: CollisionResult<M>) -> ExtCollisionResult<E>
where
    E: From<M>,
{
    ExtCollisionResult {
        collision: result.collision(),
        manifest: result.into_manifest().map(E::from),
    }
}
