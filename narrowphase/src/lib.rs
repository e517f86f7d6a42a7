//! Narrow-phase collision detection for simple 2D convex shapes.
//!
//! Given a pair of circles, four-corner axis-aligned boxes or capsules, the library decides
//! whether they overlap and, for circles and boxes, computes a manifest describing how far
//! each shape has to move along the minimum translation axis to separate them.

/// Boolean collision predicates, the Separating Axis Theorem machinery and manifest generators
pub mod collision;

/// Error types surfaced at the validation boundary
pub mod error;

/// Geometric primitives and base algorithms
pub mod geometry;

/// External (serializable) representations of the shapes and their import into validated ones
pub mod io;

/// The public operation set, working on external representations
pub mod query;

/// Helper functions which do not belong to any specific module
pub mod util;
