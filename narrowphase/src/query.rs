//! Every operation validates all of its inputs before computing anything.
//! A structurally malformed shape results in an [`InvalidParameter`] naming the operation.

use crate::collision::{CircleBoxManifest, CollisionResult, PairManifest};
use crate::error::{InvalidParameter, Operation};
use crate::geometry::geo_traits::{CollidesWith, Separation};
use crate::io::ext_repr::{ExtBox, ExtCapsule, ExtCircle};
use crate::io::import::{import_box, import_capsule, import_circle};

pub fn bool_circle_to_circle(
    left: &ExtCircle,
    right: &ExtCircle,
) -> Result<bool, InvalidParameter> {
    let invalid = InvalidParameter::raised_by(Operation::BoolCircleToCircle);
    let left = import_circle(left).map_err(&invalid)?;
    let right = import_circle(right).map_err(&invalid)?;
    Ok(left.collides_with(&right))
}

/// Manifest fields: `left_distance` and `right_distance`.
pub fn mani_circle_to_circle(
    left: &ExtCircle,
    right: &ExtCircle,
) -> Result<CollisionResult<PairManifest>, InvalidParameter> {
    let invalid = InvalidParameter::raised_by(Operation::ManiCircleToCircle);
    let left = import_circle(left).map_err(&invalid)?;
    let right = import_circle(right).map_err(&invalid)?;
    Ok(left.separation(&right))
}

pub fn bool_box_to_box(left: &ExtBox, right: &ExtBox) -> Result<bool, InvalidParameter> {
    let invalid = InvalidParameter::raised_by(Operation::BoolBoxToBox);
    let left = import_box(left).map_err(&invalid)?;
    let right = import_box(right).map_err(&invalid)?;
    Ok(left.collides_with(&right))
}

/// Manifest fields: `left_distance` and `right_distance`.
pub fn mani_box_to_box(
    left: &ExtBox,
    right: &ExtBox,
) -> Result<CollisionResult<PairManifest>, InvalidParameter> {
    let invalid = InvalidParameter::raised_by(Operation::ManiBoxToBox);
    let left = import_box(left).map_err(&invalid)?;
    let right = import_box(right).map_err(&invalid)?;
    Ok(left.separation(&right))
}

pub fn bool_circle_to_box(circle: &ExtCircle, aabox: &ExtBox) -> Result<bool, InvalidParameter> {
    let invalid = InvalidParameter::raised_by(Operation::BoolCircleToBox);
    let circle = import_circle(circle).map_err(&invalid)?;
    let aabox = import_box(aabox).map_err(&invalid)?;
    Ok(circle.collides_with(&aabox))
}

/// Manifest fields: `circle_distance` and `box_distance`.
pub fn mani_circle_to_box(
    circle: &ExtCircle,
    aabox: &ExtBox,
) -> Result<CollisionResult<CircleBoxManifest>, InvalidParameter> {
    let invalid = InvalidParameter::raised_by(Operation::ManiCircleToBox);
    let circle = import_circle(circle).map_err(&invalid)?;
    let aabox = import_box(aabox).map_err(&invalid)?;
    Ok(circle.separation(&aabox))
}

pub fn bool_capsule_to_capsule(
    left: &ExtCapsule,
    right: &ExtCapsule,
) -> Result<bool, InvalidParameter> {
    let invalid = InvalidParameter::raised_by(Operation::BoolCapsuleToCapsule);
    let left = import_capsule(left).map_err(&invalid)?;
    let right = import_capsule(right).map_err(&invalid)?;
    Ok(left.collides_with(&right))
}

/// Compares the distance from the circle's center to the capsule's segment against the combined radius.
pub fn bool_capsule_to_circle(
    capsule: &ExtCapsule,
    circle: &ExtCircle,
) -> Result<bool, InvalidParameter> {
    let invalid = InvalidParameter::raised_by(Operation::BoolCapsuleToCircle);
    let capsule = import_capsule(capsule).map_err(&invalid)?;
    let circle = import_circle(circle).map_err(&invalid)?;
    Ok(capsule.collides_with(&circle))
}
