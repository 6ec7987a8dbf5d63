use super::*;
use nalgebra::vector;

#[test]
fn vertical_chord_hits_unit_circle_near_center() {
    // Line x = 0.6 meets the unit circle at (0.6, ±0.8).
    let p1 = vector![0.6, 0.1];
    let p2 = vector![0.6, -0.3];
    let up = edge_circle_intersection(p1, p2, vector![0.6, 0.5], 1.0).unwrap();
    assert!((up - vector![0.6, 0.8]).norm() < 1e-12);
    let down = edge_circle_intersection(p1, p2, vector![0.6, -0.5], 1.0).unwrap();
    assert!((down - vector![0.6, -0.8]).norm() < 1e-12);
}

#[test]
fn slanted_edge_root_lies_on_circle_and_line() {
    let p1 = vector![1.0, 2.0];
    let p2 = vector![4.0, 7.0];
    let radius = 5.0;
    let hit = edge_circle_intersection(p1, p2, vector![2.0, 3.0], radius).unwrap();
    assert!((hit.norm() - radius).abs() < 1e-9);
    let along = p2 - p1;
    let off = hit - p1;
    assert!((along.x * off.y - along.y * off.x).abs() < 1e-9);
}

#[test]
fn tie_prefers_upper_root() {
    // Center on the x-axis is equidistant from (0.6, ±0.8).
    let hit =
        edge_circle_intersection(vector![0.6, 1.0], vector![0.6, -1.0], vector![0.6, 0.0], 1.0)
            .unwrap();
    assert!(hit.y > 0.0);
}

#[test]
fn horizontal_edge_is_reported() {
    let err = edge_circle_intersection(vector![0.0, 1.0], vector![2.0, 1.0], vector![1.0, 0.0], 3.0)
        .unwrap_err();
    assert_eq!(err, GeometryError::HorizontalEdge { y: 1.0 });
}

#[test]
fn missing_line_is_reported() {
    let err = edge_circle_intersection(vector![5.0, 0.0], vector![5.0, 1.0], vector![5.0, 0.5], 1.0)
        .unwrap_err();
    assert!(matches!(err, GeometryError::NoIntersection { discriminant } if discriminant < 0.0));
}

#[test]
fn tangent_line_is_clamped() {
    // x = 1 touches the unit circle at (1, 0).
    let hit =
        edge_circle_intersection(vector![1.0, 0.5], vector![1.0, -0.5], vector![1.0, 0.0], 1.0)
            .unwrap();
    assert!((hit - vector![1.0, 0.0]).norm() < 1e-12);
}

#[test]
fn hexagon_area_matches_closed_form() {
    // Corners (±r, ±R/2), (0, ±R): a 2r×R box plus two triangles = 3rR.
    let (r, big_r) = (2.0, 3f64.sqrt() * 4.0);
    let (x, y) = (13.0, -7.5);
    let hex = [
        vector![x + r, y + 0.5 * big_r],
        vector![x, y + big_r],
        vector![x - r, y + 0.5 * big_r],
        vector![x - r, y - 0.5 * big_r],
        vector![x, y - big_r],
        vector![x + r, y - 0.5 * big_r],
    ];
    assert!((shoelace_area(&hex) - 3.0 * r * big_r).abs() < 1e-9);
}
