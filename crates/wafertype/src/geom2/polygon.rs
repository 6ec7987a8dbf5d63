use nalgebra::Vector2;

/// Signed area of a polygon given by its vertices in walk order (shoelace).
///
/// The last vertex connects back to the first. Positive for a
/// counter-clockwise walk, negative otherwise. Fewer than three vertices
/// enclose nothing and yield `0.0`.
pub fn shoelace_area(verts: &[Vector2<f64>]) -> f64 {
    let n = verts.len();
    let mut area = 0.0;
    for k1 in 0..n {
        let k2 = if k1 == n - 1 { 0 } else { k1 + 1 };
        let (p, q) = (verts[k1], verts[k2]);
        area += 0.5 * (p.x * q.y - q.x * p.y);
    }
    area
}
