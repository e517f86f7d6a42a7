//Various checks to verify correctness of intermediate results
//Used in debug_assert!() blocks

use crate::collision::{CircleBoxManifest, PairManifest};
use crate::geometry::primitives::Vector2;
use crate::util::FPA;

/// Separating axes are either normalized or, for degenerate input, the zero vector.
pub fn is_unit_or_zero(axis: &Vector2) -> bool {
    axis.is_zero() || FPA(axis.length()) == FPA(1.0)
}

/// Both pushes of a manifest are exact negations of each other.
pub fn pushes_are_opposite(a: Vector2, b: Vector2) -> bool {
    a == -b
}

pub fn pair_manifest_is_opposite(manifest: &PairManifest) -> bool {
    pushes_are_opposite(manifest.left_distance, manifest.right_distance)
}

pub fn circle_box_manifest_is_opposite(manifest: &CircleBoxManifest) -> bool {
    pushes_are_opposite(manifest.circle_distance, manifest.box_distance)
}
