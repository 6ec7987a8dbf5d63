use std::fmt;

use nalgebra::Vector2;

/// Relative band below zero inside which a discriminant counts as a tangency.
///
/// Clipped edges always start inside the circle, so the exact discriminant is
/// non-negative; this only absorbs round-off when a corner sits on the circle.
pub const DISC_EPS: f64 = 1e-12;

/// Failures of the line–circle solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// Both edge endpoints share the same `y`; the `x = slope·y + b` form is undefined.
    HorizontalEdge { y: f64 },
    /// The line misses the circle (discriminant clearly negative).
    NoIntersection { discriminant: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::HorizontalEdge { y } => {
                write!(f, "edge is horizontal at y = {y} (slope undefined)")
            }
            GeometryError::NoIntersection { discriminant } => write!(
                f,
                "line does not meet the circle (discriminant {discriminant:e})"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Intersection of the line through `p1`, `p2` with the circle `|p| = radius`.
///
/// The line is written as `x = slope·y + b`, which requires `p1.y != p2.y`.
/// Of the two roots the one closer to `center` is returned; on a tie the
/// root with the larger `y` wins.
pub fn edge_circle_intersection(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    center: Vector2<f64>,
    radius: f64,
) -> Result<Vector2<f64>, GeometryError> {
    let dy = p1.y - p2.y;
    if dy == 0.0 {
        return Err(GeometryError::HorizontalEdge { y: p1.y });
    }
    let slope = (p1.x - p2.x) / dy;
    let interc = p1.x - slope * p1.y;
    let lead = (slope * slope + 1.0) * radius * radius;
    let mut disc = lead - interc * interc;
    if disc < 0.0 {
        if disc < -DISC_EPS * lead {
            return Err(GeometryError::NoIntersection { discriminant: disc });
        }
        disc = 0.0;
    }
    let v1 = disc.sqrt();
    let denom = 1.0 + slope * slope;
    let roots = [(-slope * interc + v1) / denom, (-slope * interc - v1) / denom];
    let pts = roots.map(|y| Vector2::new(slope * y + interc, y));
    let d0 = (pts[0] - center).norm_squared();
    let d1 = (pts[1] - center).norm_squared();
    Ok(if d0 > d1 { pts[1] } else { pts[0] })
}
