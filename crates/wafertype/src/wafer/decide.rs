//! Decision rules turning corner bins into a `WaferType`.
//!
//! Corner counting (`Mode::CornerCount`) compares bin sizes with one
//! threshold. The area-aware rules (`Mode::AreaFraction`) settle clear cases
//! by counts and clip the hexagon against the fine or coarse circle for the
//! rest, comparing the clipped area fraction with `cut_frac_area`.

use std::fmt;

use nalgebra::Vector2;

use super::corners::{next_corner, CornerBins, Corners};
use super::types::{Mode, RadiusLimits, WaferType, WaferTypeCfg};
use crate::geom2::{edge_circle_intersection, shoelace_area, GeometryError};

/// Outcome of `decide`, with the area fraction when clipping happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    pub wafer_type: WaferType,
    pub frac_area: Option<f64>,
}

/// A clipped edge whose line–circle solve failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyError {
    pub edge: (usize, usize),
    pub source: GeometryError,
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clipping hexagon edge ({}, {}) failed: {}",
            self.edge.0, self.edge.1, self.source
        )
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub fn decide(
    cfg: &WaferTypeCfg,
    bins: &CornerBins,
    corners: &Corners,
    limits: RadiusLimits,
    center: Vector2<f64>,
) -> Result<Decision, ClassifyError> {
    let (nf, nc) = (bins.fine.len(), bins.coarse.len());
    let clean = |wafer_type: WaferType| -> Result<Decision, ClassifyError> {
        Ok(Decision {
            wafer_type,
            frac_area: None,
        })
    };
    match cfg.mode() {
        Mode::CornerCount { corner_cut } => {
            let cut = corner_cut as usize;
            if nf >= cut {
                clean(WaferType::Fine)
            } else if nc >= cut {
                clean(WaferType::Coarse)
            } else {
                clean(WaferType::Outside)
            }
        }
        Mode::AreaFraction => {
            if nf >= 4 {
                return clean(WaferType::Fine);
            }
            if nc >= 4 && nf <= 1 {
                return clean(WaferType::Coarse);
            }
            if nc < 2 && nf == 0 {
                return clean(WaferType::Outside);
            }
            let from_fine = nf > 0;
            let (subset, radius) = if from_fine {
                (&bins.fine, limits.inner)
            } else {
                (&bins.coarse, limits.outer)
            };
            let clipped = clip_subset(subset, corners, center, radius)?;
            let frac = shoelace_area(&clipped) / shoelace_area(corners);
            let above_cut = frac > cfg.cut_frac_area;
            let wafer_type = if from_fine {
                WaferType::FromFineSet { above_cut }
            } else {
                WaferType::FromCoarseSet { above_cut }
            };
            Ok(Decision {
                wafer_type,
                frac_area: Some(frac),
            })
        }
    }
}

/// Polygon spanned by the `subset` corners, closed off against the circle.
///
/// Walks `subset` in ascending order. Every corner is kept; when its hexagon
/// successor is not in `subset`, the edge leaves the band and the crossing
/// with the circle of `radius` (nearest to `center`) is appended after it.
pub fn clip_subset(
    subset: &[usize],
    corners: &Corners,
    center: Vector2<f64>,
    radius: f64,
) -> Result<Vec<Vector2<f64>>, ClassifyError> {
    let mut out = Vec::with_capacity(2 * subset.len());
    for &k1 in subset {
        let k2 = next_corner(k1);
        out.push(corners[k1]);
        if !subset.contains(&k2) {
            let hit = edge_circle_intersection(corners[k1], corners[k2], center, radius)
                .map_err(|source| ClassifyError {
                    edge: (k1, k2),
                    source,
                })?;
            out.push(hit);
        }
    }
    Ok(out)
}
