use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// External representation of a [`Vector2`](crate::geometry::primitives::Vector2).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtVector {
    pub x: f32,
    pub y: f32,
}

/// External representation of a [`Circle`](crate::geometry::primitives::Circle).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtCircle {
    /// Center of the circle
    pub position: ExtVector,
    pub radius: f32,
}

/// External representation of an [`AABox`](crate::geometry::primitives::AABox).
/// Its four corners, wound consistently. Any other number of points is rejected on import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct ExtBox(pub Vec<ExtVector>);

/// External representation of a [`Capsule`](crate::geometry::primitives::Capsule).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCapsule {
    /// The two endpoints of the core segment. Any other number of points is rejected on import.
    pub points: Vec<ExtVector>,
    pub radius: f32,
}

/// External representation of a [`PairManifest`](crate::collision::PairManifest).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtPairManifest {
    pub left_distance: ExtVector,
    pub right_distance: ExtVector,
}

/// External representation of a [`CircleBoxManifest`](crate::collision::CircleBoxManifest).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtCircleBoxManifest {
    pub circle_distance: ExtVector,
    pub box_distance: ExtVector,
}

/// External representation of a [`CollisionResult`](crate::collision::CollisionResult).
/// Without a collision the manifest is serialized as an empty object.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(bound(serialize = "M: Serialize"))]
pub struct ExtCollisionResult<M> {
    pub collision: bool,
    #[serde(serialize_with = "manifest_or_empty")]
    pub manifest: Option<M>,
}

fn manifest_or_empty<M, S>(manifest: &Option<M>, serializer: S) -> Result<S::Ok, S::Error>
where
    M: Serialize,
    S: Serializer,
{
    match manifest {
        Some(m) => m.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
