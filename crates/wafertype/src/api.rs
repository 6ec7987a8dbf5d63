//! Curated API surface for the CLI, the Python bindings, and benches.
//!
//! Stage-level functions are exposed alongside the classifier so callers can
//! inspect intermediate results (limits, bins, clipped polygons).

pub use crate::diag::{Diagnostic, DiagnosticSink, MemorySink};
pub use crate::geom2::{edge_circle_intersection, shoelace_area, GeometryError};
pub use crate::wafer::{
    bin_corners, clip_subset, decide, hexagon_corners, r_limits, Category, CfgError,
    Classification, ClassifyError, Coeffs5, CornerBins, Corners, Decision, Mode, RadiusLimits,
    WaferClassifier, WaferType, WaferTypeCfg, CORNER_COUNT,
};

use nalgebra::Vector2;

/// Signed area of a polygon given as plain `(x, y)` pairs.
pub fn polygon_area(points: &[(f64, f64)]) -> f64 {
    let verts: Vec<Vector2<f64>> = points.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    shoelace_area(&verts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn triangle_area_from_tuples() {
        let tri = [(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
        assert!((polygon_area(&tri) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn translation_keeps_area_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        let base = [(1.0, 0.0), (0.0, 2.0), (-1.5, 0.5), (-0.5, -1.0)];
        let dx = rng.gen_range(-50.0..50.0);
        let dy = rng.gen_range(-50.0..50.0);
        let moved: Vec<_> = base.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
        assert!((polygon_area(&base) - polygon_area(&moved)).abs() < 1e-9);
    }
}
