/// Separating Axis Theorem: overlap tests and minimum translation vectors along a set of axes
pub mod sat;

mod box_box;
mod capsule;
mod circle_box;
mod circle_circle;
mod manifest;

#[doc(inline)]
pub use manifest::CircleBoxManifest;
#[doc(inline)]
pub use manifest::CollisionResult;
#[doc(inline)]
pub use manifest::PairManifest;
