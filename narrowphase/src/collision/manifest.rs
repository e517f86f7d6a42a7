use crate::geometry::primitives::Vector2;

/// Outcome of a manifest generator: whether two shapes collide and, only if they do,
/// the manifest describing how to separate them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionResult<M> {
    manifest: Option<M>,
}

impl<M> CollisionResult<M> {
    /// The shapes do not collide, there is nothing to separate.
    pub fn none() -> Self {
        CollisionResult { manifest: None }
    }

    pub fn colliding(manifest: M) -> Self {
        CollisionResult {
            manifest: Some(manifest),
        }
    }

    pub fn collision(&self) -> bool {
        self.manifest.is_some()
    }

    /// The separation manifest, absent when there is no collision.
    pub fn manifest(&self) -> Option<&M> {
        self.manifest.as_ref()
    }

    pub fn into_manifest(self) -> Option<M> {
        self.manifest
    }
}

/// Separation of two shapes of the same kind.
/// Each distance is the displacement to add to that shape's position; they are exact negations of each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairManifest {
    pub left_distance: Vector2,
    pub right_distance: Vector2,
}

impl PairManifest {
    /// Manifest moving the right shape by `displacement` and the left one by its negation.
    pub fn pushing_right_by(displacement: Vector2) -> Self {
        PairManifest {
            left_distance: -displacement,
            right_distance: displacement,
        }
    }
}

/// Separation of a circle and a box.
/// Each distance is the displacement to add to that shape's position; they are exact negations of each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleBoxManifest {
    pub circle_distance: Vector2,
    pub box_distance: Vector2,
}

impl CircleBoxManifest {
    /// Manifest moving the circle by `displacement` and the box by its negation.
    pub fn pushing_circle_by(displacement: Vector2) -> Self {
        CircleBoxManifest {
            circle_distance: displacement,
            box_distance: -displacement,
        }
    }
}
