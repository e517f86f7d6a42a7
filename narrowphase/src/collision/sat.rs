use log::trace;

use crate::geometry::geo_traits::ProjectOnto;
use crate::geometry::primitives::Vector2;
use crate::util::assertions;

/// Minimum translation vector.
/// Moving the second shape by `axis * depth` (or the first one by the negation) separates the two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mtv {
    /// Unit axis, oriented in the direction the second shape has to move
    pub axis: Vector2,
    pub depth: f32,
}

impl Mtv {
    /// Used when no axis could be tested, there is no direction to push in.
    pub const ZERO: Mtv = Mtv {
        axis: Vector2::ZERO,
        depth: 0.0,
    };

    pub fn displacement(&self) -> Vector2 {
        self.axis * self.depth
    }
}

/// Whether the projections of `a` and `b` overlap on every axis.
/// Stops at the first separating axis.
pub fn overlaps_on_all_axes(a: &impl ProjectOnto, b: &impl ProjectOnto, axes: &[Vector2]) -> bool {
    debug_assert!(axes.iter().all(assertions::is_unit_or_zero));
    testable(axes).all(|axis| a.project_onto(axis).overlaps(&b.project_onto(axis)))
}

/// Returns `None` if one of the axes separates `a` and `b`.
/// Otherwise returns the [`Mtv`] along the axis with the smallest overlap,
/// the first tested axis wins in case of a tie.
pub fn minimum_translation(
    a: &impl ProjectOnto,
    b: &impl ProjectOnto,
    axes: &[Vector2],
) -> Option<Mtv> {
    debug_assert!(axes.iter().all(assertions::is_unit_or_zero));
    let mut mtv: Option<Mtv> = None;

    for axis in testable(axes) {
        let (proj_a, proj_b) = (a.project_onto(axis), b.project_onto(axis));
        if !proj_a.overlaps(&proj_b) {
            return None;
        }
        let overlap = proj_a.smallest_overlap(&proj_b);
        //an infinite overlap (huge extents) still yields an axis
        if mtv.is_none_or(|m| overlap < m.depth) {
            mtv = Some(Mtv {
                axis: axis * proj_a.push_direction(&proj_b),
                depth: overlap,
            });
        }
    }
    Some(mtv.unwrap_or(Mtv::ZERO))
}

/// Zero axes (from degenerate edges or coincident centers) carry no separating information.
fn testable(axes: &[Vector2]) -> impl Iterator<Item = Vector2> + '_ {
    axes.iter().copied().filter(|axis| {
        if axis.is_zero() {
            trace!("skipping degenerate separating axis");
        }
        !axis.is_zero()
    })
}
