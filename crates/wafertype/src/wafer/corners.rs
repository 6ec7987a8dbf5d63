use nalgebra::Vector2;

use super::types::RadiusLimits;

pub const CORNER_COUNT: usize = 6;

/// Hexagon corners in walk order (counter-clockwise, starting upper right).
pub type Corners = [Vector2<f64>; CORNER_COUNT];

/// Corners of the wafer centred at `center` with half-width `r` and corner span `big_r`.
///
/// Order matters: consecutive indices (with 5 → 0) are hexagon edges.
pub fn hexagon_corners(center: Vector2<f64>, r: f64, big_r: f64) -> Corners {
    let (x, y) = (center.x, center.y);
    [
        Vector2::new(x + r, y + 0.5 * big_r),
        Vector2::new(x, y + big_r),
        Vector2::new(x - r, y + 0.5 * big_r),
        Vector2::new(x - r, y - 0.5 * big_r),
        Vector2::new(x, y - big_r),
        Vector2::new(x + r, y - 0.5 * big_r),
    ]
}

/// Successor of corner `k` along the hexagon.
#[inline]
pub fn next_corner(k: usize) -> usize {
    if k == CORNER_COUNT - 1 {
        0
    } else {
        k + 1
    }
}

/// Corner indices grouped by radial band, each list ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CornerBins {
    /// `|corner| <= inner`.
    pub fine: Vec<usize>,
    /// `inner < |corner| <= outer`.
    pub coarse: Vec<usize>,
}

impl CornerBins {
    /// Corners beyond the outer radius.
    #[inline]
    pub fn outside(&self) -> usize {
        CORNER_COUNT - self.fine.len() - self.coarse.len()
    }
}

pub fn bin_corners(corners: &Corners, limits: RadiusLimits) -> CornerBins {
    let mut bins = CornerBins {
        fine: Vec::with_capacity(CORNER_COUNT),
        coarse: Vec::with_capacity(CORNER_COUNT),
    };
    for (k, c) in corners.iter().enumerate() {
        let rpos = (c.x * c.x + c.y * c.y).sqrt();
        if rpos <= limits.inner {
            bins.fine.push(k);
        } else if rpos <= limits.outer {
            bins.coarse.push(k);
        }
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn corners_follow_offset_table() {
        let c = hexagon_corners(vector![1.0, 2.0], 0.5, 3.0);
        let expect = [
            (1.5, 3.5),
            (1.0, 5.0),
            (0.5, 3.5),
            (0.5, 0.5),
            (1.0, -1.0),
            (1.5, 0.5),
        ];
        for (got, (ex, ey)) in c.iter().zip(expect) {
            assert_eq!((got.x, got.y), (ex, ey));
        }
        assert_eq!(next_corner(5), 0);
        assert_eq!(next_corner(2), 3);
    }

    #[test]
    fn boundary_distances_bin_inclusively() {
        // Corner 1 at distance exactly 5, corner 4 at exactly 3.
        let c = hexagon_corners(vector![0.0, 1.0], 4.0, 4.0);
        assert_eq!(c[1].norm(), 5.0);
        assert_eq!(c[4].norm(), 3.0);
        let bins = bin_corners(&c, RadiusLimits { inner: 3.0, outer: 5.0 });
        assert_eq!(bins.fine, vec![4]);
        assert!(bins.coarse.contains(&1));
    }

    #[test]
    fn bins_are_ascending_and_disjoint() {
        let c = hexagon_corners(vector![7.5, 0.0], 2.0, 3f64.sqrt() * 4.0);
        let bins = bin_corners(&c, RadiusLimits { inner: 10.0, outer: 20.0 });
        assert_eq!(bins.fine, vec![2, 3]);
        assert_eq!(bins.coarse, vec![0, 1, 4, 5]);
        assert_eq!(bins.outside(), 0);
    }
}
