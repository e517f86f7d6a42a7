use log::warn;

use crate::error::ShapeError;
use crate::geometry::primitives::{AABox, Capsule, Circle, Vector2};
use crate::io::ext_repr::{ExtBox, ExtCapsule, ExtCircle, ExtVector};

pub fn import_vector(ext_vector: &ExtVector) -> Result<Vector2, ShapeError> {
    Vector2::try_new(ext_vector.x, ext_vector.y)
}

pub fn import_circle(ext_circle: &ExtCircle) -> Result<Circle, ShapeError> {
    let center = import_vector(&ext_circle.position)?;
    let circle = Circle::try_new(center, ext_circle.radius)?;
    if circle.radius < 0.0 {
        warn!(
            "circle at {center:?} has a negative radius ({}), accepted as-is",
            circle.radius
        );
    }
    Ok(circle)
}

pub fn import_box(ext_box: &ExtBox) -> Result<AABox, ShapeError> {
    let points = ext_box
        .0
        .iter()
        .map(import_vector)
        .collect::<Result<Vec<_>, _>>()?;
    AABox::try_from_points(&points)
}

pub fn import_capsule(ext_capsule: &ExtCapsule) -> Result<Capsule, ShapeError> {
    let points = ext_capsule
        .points
        .iter()
        .map(import_vector)
        .collect::<Result<Vec<_>, _>>()?;
    let capsule = Capsule::try_from_points(&points, ext_capsule.radius)?;
    if capsule.radius < 0.0 {
        warn!(
            "capsule {:?} has a negative radius ({}), accepted as-is",
            capsule.segment, capsule.radius
        );
    }
    Ok(capsule)
}
