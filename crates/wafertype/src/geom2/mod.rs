//! Small 2D geometry kernels used by the wafer classifier.
//!
//! Purpose
//! - Signed polygon area (shoelace) over ordered vertex lists.
//! - Intersection of the line through a hexagon edge with an origin-centred
//!   circle, picking the root nearest to a reference point.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; polygons are slices in walk order.
//! - Areas are signed: positive for counter-clockwise walks. Callers take
//!   ratios of areas with the same orientation, so signs cancel.
//! - Degenerate inputs are reported through `GeometryError`, never as NaN.
//!
//! Code cross-refs: `wafer::decide` (clipping), `wafer::classifier`.

mod circle;
mod polygon;

pub use circle::{edge_circle_intersection, GeometryError, DISC_EPS};
pub use polygon::shoelace_area;

#[cfg(test)]
mod tests;
