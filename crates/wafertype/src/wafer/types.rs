//! Configuration and result types for wafer classification.
//!
//! - `Coeffs5`: fixed-length radius polynomial (Horner order, leading first).
//! - `WaferTypeCfg`: immutable classifier parameters plus validation.
//! - `RadiusLimits`: inner (fine) / outer (coarse) radii at one z.
//! - `WaferType`: tagged result with the integer code mappings.

use std::fmt;

/// Coefficients of a radius polynomial in scaled |z|.
///
/// `0` is the leading coefficient; evaluation is Horner's scheme
/// `((((c0·z + c1)·z + c2)·z + c3)·z + c4)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coeffs5(pub [f64; 5]);

impl Coeffs5 {
    pub const LEN: usize = 5;

    /// Check length of a dynamic coefficient list.
    pub fn from_slice(which: &'static str, c: &[f64]) -> Result<Self, CfgError> {
        let arr: [f64; 5] = c
            .try_into()
            .map_err(|_| CfgError::CoefficientCount { which, len: c.len() })?;
        Ok(Self(arr))
    }

    /// Polynomial that evaluates to `c` everywhere.
    #[inline]
    pub fn constant(c: f64) -> Self {
        Self([0.0, 0.0, 0.0, 0.0, c])
    }

    #[inline]
    pub fn horner(&self, z: f64) -> f64 {
        self.0[1..].iter().fold(self.0[0], |acc, &c| acc * z + c)
    }
}

/// Classifier parameters, fixed for the lifetime of a `WaferClassifier`.
///
/// Lengths are in the caller's units (mm for detector descriptions); the
/// radius polynomials are evaluated in cm, see `wafer::limits`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaferTypeCfg {
    /// Fine (inner) radius polynomial.
    pub rad100: Coeffs5,
    /// Coarse (outer) radius polynomial.
    pub rad200: Coeffs5,
    pub wafer_size: f64,
    /// |z| below this is clamped up before evaluating the polynomials.
    pub z_min: f64,
    /// `1` selects corner counting, anything else the area-aware rules.
    pub choice: i32,
    /// Corner threshold used by corner counting.
    pub corner_cut: u32,
    /// Area-fraction threshold used by the area-aware rules.
    pub cut_frac_area: f64,
}

/// Decision rules selected by `WaferTypeCfg::choice`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    CornerCount { corner_cut: u32 },
    AreaFraction,
}

impl WaferTypeCfg {
    /// Validated configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rad100: Coeffs5,
        rad200: Coeffs5,
        wafer_size: f64,
        z_min: f64,
        choice: i32,
        corner_cut: u32,
        cut_frac_area: f64,
    ) -> Result<Self, CfgError> {
        let cfg = Self {
            rad100,
            rad200,
            wafer_size,
            z_min,
            choice,
            corner_cut,
            cut_frac_area,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build from dynamic coefficient lists (as delivered by parameter files).
    #[allow(clippy::too_many_arguments)]
    pub fn from_slices(
        rad100: &[f64],
        rad200: &[f64],
        wafer_size: f64,
        z_min: f64,
        choice: i32,
        corner_cut: u32,
        cut_frac_area: f64,
    ) -> Result<Self, CfgError> {
        Self::new(
            Coeffs5::from_slice("rad100", rad100)?,
            Coeffs5::from_slice("rad200", rad200)?,
            wafer_size,
            z_min,
            choice,
            corner_cut,
            cut_frac_area,
        )
    }

    pub fn validate(&self) -> Result<(), CfgError> {
        let scalars = [
            ("wafer_size", self.wafer_size),
            ("z_min", self.z_min),
            ("cut_frac_area", self.cut_frac_area),
        ];
        let coeffs = self
            .rad100
            .0
            .iter()
            .map(|&c| ("rad100", c))
            .chain(self.rad200.0.iter().map(|&c| ("rad200", c)));
        for (field, v) in scalars.into_iter().chain(coeffs) {
            if !v.is_finite() {
                return Err(CfgError::NonFinite { field });
            }
        }
        if self.wafer_size <= 0.0 {
            return Err(CfgError::NonPositiveWaferSize(self.wafer_size));
        }
        if !(0.0..=1.0).contains(&self.cut_frac_area) {
            return Err(CfgError::FracOutOfRange(self.cut_frac_area));
        }
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        if self.choice == 1 {
            Mode::CornerCount {
                corner_cut: self.corner_cut,
            }
        } else {
            Mode::AreaFraction
        }
    }

    /// Horizontal half-width `r` of the hexagon.
    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * self.wafer_size
    }

    /// Vertical corner distance `R` of the hexagon.
    #[inline]
    pub fn corner_span(&self) -> f64 {
        3f64.sqrt() * self.wafer_size
    }
}

/// Rejected configurations.
#[derive(Clone, Debug, PartialEq)]
pub enum CfgError {
    /// A radius polynomial does not have exactly five coefficients.
    CoefficientCount { which: &'static str, len: usize },
    NonFinite { field: &'static str },
    NonPositiveWaferSize(f64),
    /// `cut_frac_area` outside `[0, 1]`.
    FracOutOfRange(f64),
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgError::CoefficientCount { which, len } => write!(
                f,
                "{which} needs exactly {} coefficients, got {len}",
                Coeffs5::LEN
            ),
            CfgError::NonFinite { field } => write!(f, "{field} must be finite"),
            CfgError::NonPositiveWaferSize(s) => write!(f, "wafer size must be > 0, got {s}"),
            CfgError::FracOutOfRange(v) => {
                write!(f, "area fraction cut must lie in [0, 1], got {v}")
            }
        }
    }
}

impl std::error::Error for CfgError {}

/// Fine/coarse radii at one z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusLimits {
    pub inner: f64,
    pub outer: f64,
}

/// Physical wafer category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Fine,
    Coarse,
    Outside,
}

impl Category {
    pub fn code(self) -> i32 {
        match self {
            Category::Fine => 0,
            Category::Coarse => 1,
            Category::Outside => 2,
        }
    }
}

/// Classification result.
///
/// The first three variants are clean corner-count decisions. The last two
/// record that the area-aware rules had to clip the wafer: either against the
/// fine radius using the fine corners, or against the coarse radius using the
/// coarse corners, and whether the clipped area fraction exceeded the cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaferType {
    Fine,
    Coarse,
    Outside,
    FromFineSet { above_cut: bool },
    FromCoarseSet { above_cut: bool },
}

impl WaferType {
    /// Integer type code.
    ///
    /// `0`/`1`/`2` for clean decisions; clipped decisions map to
    /// fine set: `-2` above the cut, else `1`; coarse set: `-1` above the
    /// cut, else `0`.
    pub fn code(self) -> i32 {
        match self {
            WaferType::Fine => 0,
            WaferType::Coarse => 1,
            WaferType::Outside => 2,
            WaferType::FromFineSet { above_cut: true } => -2,
            WaferType::FromFineSet { above_cut: false } => 1,
            WaferType::FromCoarseSet { above_cut: true } => -1,
            WaferType::FromCoarseSet { above_cut: false } => 0,
        }
    }

    /// Physical category a clipped decision settles on: enough area inside
    /// the fine radius keeps the wafer fine (else coarse); enough area inside
    /// the coarse radius keeps it coarse (else outside).
    pub fn category(self) -> Category {
        match self {
            WaferType::Fine | WaferType::FromFineSet { above_cut: true } => Category::Fine,
            WaferType::Coarse
            | WaferType::FromFineSet { above_cut: false }
            | WaferType::FromCoarseSet { above_cut: true } => Category::Coarse,
            WaferType::Outside | WaferType::FromCoarseSet { above_cut: false } => {
                Category::Outside
            }
        }
    }

    /// `category().code()`, the collapsed 0/1/2 encoding of historical data.
    #[inline]
    pub fn resolved_code(self) -> i32 {
        self.category().code()
    }

    #[inline]
    pub fn is_clipped(self) -> bool {
        matches!(
            self,
            WaferType::FromFineSet { .. } | WaferType::FromCoarseSet { .. }
        )
    }
}

impl fmt::Display for WaferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaferType::Fine => write!(f, "fine"),
            WaferType::Coarse => write!(f, "coarse"),
            WaferType::Outside => write!(f, "outside"),
            WaferType::FromFineSet { above_cut } => {
                write!(f, "fine-set clip (above cut: {above_cut})")
            }
            WaferType::FromCoarseSet { above_cut } => {
                write!(f, "coarse-set clip (above cut: {above_cut})")
            }
        }
    }
}
