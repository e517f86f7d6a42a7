use narrowphase::io::ext_repr::{ExtBox, ExtCapsule, ExtCircle};
use serde::{Deserialize, Serialize};

/// File of queries the probe evaluates
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtQueryFile {
    pub queries: Vec<ExtQuery>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtQuery {
    /// Identifier echoed in the report
    pub id: String,
    pub pair: ExtPair,
}

/// Pair of shapes to test against each other, tagged by the kind of pairing
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ExtPair {
    CircleCircle {
        left: ExtCircle,
        right: ExtCircle,
    },
    BoxBox {
        left: ExtBox,
        right: ExtBox,
    },
    CircleBox {
        circle: ExtCircle,
        #[serde(rename = "box")]
        aabox: ExtBox,
    },
    CapsuleCapsule {
        left: ExtCapsule,
        right: ExtCapsule,
    },
    CapsuleCircle {
        capsule: ExtCapsule,
        circle: ExtCircle,
    },
}

impl ExtPair {
    pub fn kind(&self) -> &'static str {
        match self {
            ExtPair::CircleCircle { .. } => "circle_circle",
            ExtPair::BoxBox { .. } => "box_box",
            ExtPair::CircleBox { .. } => "circle_box",
            ExtPair::CapsuleCapsule { .. } => "capsule_capsule",
            ExtPair::CapsuleCircle { .. } => "capsule_circle",
        }
    }
}
