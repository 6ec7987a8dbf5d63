//! Wafer type classification for hexagonal sensor layers.
//!
//! A wafer centred at `(x, y, z)` is fine, coarse, or outside depending on
//! where its six corners fall relative to two z-dependent radii; borderline
//! wafers are settled by clipping the hexagon against a circle and comparing
//! area fractions.
//!
//! Layout
//! - `wafer`: configuration, radius limits, corner binning, decision rules,
//!   and the `WaferClassifier` entry point.
//! - `geom2`: shoelace area and line–circle intersection kernels.
//! - `diag`: injectable diagnostic sink.
//! - `api`: curated re-exports for callers (CLI, bindings, benches).

pub mod api;
pub mod diag;
pub mod geom2;
pub mod wafer;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use wafer::{WaferClassifier, WaferType, WaferTypeCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::diag::{Diagnostic, DiagnosticSink, MemorySink};
    pub use crate::wafer::{
        Category, CfgError, Classification, ClassifyError, Coeffs5, Mode, RadiusLimits,
        WaferClassifier, WaferType, WaferTypeCfg,
    };
    pub use nalgebra::Vector2 as Vec2;
}
