//! Geometric helper bindings (kept separate so `lib.rs` stays tiny).

use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use wafertype::api::{edge_circle_intersection, polygon_area};

/// Signed shoelace area of a polygon given as `[(x, y), ...]`.
#[pyfunction]
pub fn shoelace_area(points: Vec<(f64, f64)>) -> f64 {
    polygon_area(&points)
}

/// Crossing of the line through `p1`, `p2` with the circle `|p| = radius`,
/// nearest to `center`.
#[pyfunction]
pub fn line_circle_intersection(
    p1: (f64, f64),
    p2: (f64, f64),
    center: (f64, f64),
    radius: f64,
) -> PyResult<(f64, f64)> {
    let hit = edge_circle_intersection(
        Vector2::new(p1.0, p1.1),
        Vector2::new(p2.0, p2.1),
        Vector2::new(center.0, center.1),
        radius,
    )
    .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok((hit.x, hit.y))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(shoelace_area, m)?)?;
    m.add_function(wrap_pyfunction!(line_circle_intersection, m)?)?;
    Ok(())
}
