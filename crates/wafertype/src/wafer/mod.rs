//! Wafer type classification.
//!
//! Purpose
//! - Decide, for a hexagonal sensor wafer centred at `(x, y, z)`, whether it
//!   belongs to the fine, coarse, or outside region of a layer. The regions
//!   are annuli whose radii are quartic polynomials in |z|.
//!
//! Pipeline
//! - `limits::r_limits`: z → (inner, outer) radii, |z| clamped at `z_min`.
//! - `corners::{hexagon_corners, bin_corners}`: six corners binned by radius.
//! - `decide::decide`: corner counting, or the area-aware rules which clip
//!   the hexagon against a circle and compare shoelace area fractions.
//!
//! Code cross-refs: `geom2::{shoelace_area, edge_circle_intersection}`,
//! `diag::DiagnosticSink`.

mod classifier;
pub mod corners;
pub mod decide;
pub mod limits;
mod types;

pub use classifier::{Classification, WaferClassifier};
pub use corners::{bin_corners, hexagon_corners, CornerBins, Corners, CORNER_COUNT};
pub use decide::{clip_subset, decide, ClassifyError, Decision};
pub use limits::{r_limits, SCALE_IN, SCALE_OUT};
pub use types::{Category, CfgError, Coeffs5, Mode, RadiusLimits, WaferType, WaferTypeCfg};
