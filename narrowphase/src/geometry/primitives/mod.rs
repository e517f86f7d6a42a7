mod aa_box;
mod capsule;
mod circle;
mod edge;
mod interval;
mod vector;

#[doc(inline)]
pub use aa_box::AABox;
#[doc(inline)]
pub use capsule::Capsule;
#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use interval::Interval;
#[doc(inline)]
pub use vector::Vector2;
