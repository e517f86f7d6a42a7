use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Structural defect of a shape, detected while constructing it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("{what} is not a finite number: {value}")]
    NonFinite { what: &'static str, value: f32 },
    #[error("{shape} requires exactly {expected} points, found {found}")]
    PointCount {
        shape: &'static str,
        expected: usize,
        found: usize,
    },
}

/// The public operations of [`query`](crate::query), used to identify which one rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    BoolCircleToCircle,
    ManiCircleToCircle,
    BoolBoxToBox,
    ManiBoxToBox,
    BoolCircleToBox,
    ManiCircleToBox,
    BoolCapsuleToCapsule,
    BoolCapsuleToCircle,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::BoolCircleToCircle => "bool_circle_to_circle",
            Operation::ManiCircleToCircle => "mani_circle_to_circle",
            Operation::BoolBoxToBox => "bool_box_to_box",
            Operation::ManiBoxToBox => "mani_box_to_box",
            Operation::BoolCircleToBox => "bool_circle_to_box",
            Operation::ManiCircleToBox => "mani_circle_to_box",
            Operation::BoolCapsuleToCapsule => "bool_capsule_to_capsule",
            Operation::BoolCapsuleToCircle => "bool_capsule_to_circle",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by every operation in [`query`](crate::query) when one of its inputs fails structural validation.
/// Always raised before any geometry is computed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("exception in function '{operation}' - invalid parameter: {cause}")]
pub struct InvalidParameter {
    pub operation: Operation,
    #[source]
    pub cause: ShapeError,
}

impl InvalidParameter {
    pub fn new(operation: Operation, cause: ShapeError) -> Self {
        InvalidParameter { operation, cause }
    }

    /// Returns a closure attaching `operation` to a [`ShapeError`], for use with [`Result::map_err`].
    pub fn raised_by(operation: Operation) -> impl Fn(ShapeError) -> InvalidParameter {
        move |cause| InvalidParameter::new(operation, cause)
    }
}
