use std::fmt;
use std::sync::Arc;

use nalgebra::Vector2;

use super::corners::{bin_corners, hexagon_corners, CornerBins, Corners};
use super::decide::{decide, ClassifyError};
use super::limits::r_limits;
use super::types::{CfgError, RadiusLimits, WaferType, WaferTypeCfg};
use crate::diag::{Diagnostic, DiagnosticSink};

/// Everything computed for one wafer, for callers that want more than the type.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub limits: RadiusLimits,
    pub corners: Corners,
    pub bins: CornerBins,
    pub frac_area: Option<f64>,
    pub wafer_type: WaferType,
}

/// Per-wafer classifier over a fixed configuration.
///
/// Cheap to share: `classify` takes `&self` and touches no mutable state
/// besides forwarding records to the optional sink.
pub struct WaferClassifier {
    cfg: WaferTypeCfg,
    r: f64,
    big_r: f64,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl WaferClassifier {
    pub fn new(cfg: WaferTypeCfg) -> Result<Self, CfgError> {
        cfg.validate()?;
        Ok(Self {
            r: cfg.half_width(),
            big_r: cfg.corner_span(),
            cfg,
            sink: None,
        })
    }

    /// Like `new`, additionally reporting to `sink` (starting with an `Initialized` record).
    pub fn with_sink(cfg: WaferTypeCfg, sink: Arc<dyn DiagnosticSink>) -> Result<Self, CfgError> {
        let mut me = Self::new(cfg)?;
        sink.record(&Diagnostic::Initialized {
            wafer_size: cfg.wafer_size,
            half_width: me.r,
            corner_span: me.big_r,
            choice: cfg.choice,
            corner_cut: cfg.corner_cut,
            cut_frac_area: cfg.cut_frac_area,
            z_min: cfg.z_min,
            rad100: cfg.rad100,
            rad200: cfg.rad200,
        });
        me.sink = Some(sink);
        Ok(me)
    }

    #[inline]
    pub fn cfg(&self) -> &WaferTypeCfg {
        &self.cfg
    }

    #[inline]
    pub fn r_limits(&self, z: f64) -> RadiusLimits {
        r_limits(&self.cfg, z)
    }

    #[inline]
    pub fn corners(&self, x: f64, y: f64) -> Corners {
        hexagon_corners(Vector2::new(x, y), self.r, self.big_r)
    }

    /// Type of the wafer centred at `(x, y, z)`.
    pub fn classify(&self, x: f64, y: f64, z: f64) -> Result<WaferType, ClassifyError> {
        self.classify_detailed(x, y, z).map(|c| c.wafer_type)
    }

    /// Integer code of `classify`, see `WaferType::code`.
    pub fn type_code(&self, x: f64, y: f64, z: f64) -> Result<i32, ClassifyError> {
        self.classify(x, y, z).map(WaferType::code)
    }

    /// `type_code` over many centres; stops at the first failure.
    pub fn type_codes(&self, points: &[[f64; 3]]) -> Result<Vec<i32>, ClassifyError> {
        points
            .iter()
            .map(|&[x, y, z]| self.type_code(x, y, z))
            .collect()
    }

    pub fn classify_detailed(&self, x: f64, y: f64, z: f64) -> Result<Classification, ClassifyError> {
        let center = Vector2::new(x, y);
        let corners = hexagon_corners(center, self.r, self.big_r);
        let limits = r_limits(&self.cfg, z);
        let bins = bin_corners(&corners, limits);
        let decision = decide(&self.cfg, &bins, &corners, limits, center)?;
        if let Some(sink) = &self.sink {
            sink.record(&Diagnostic::Classified {
                position: [x, y, z],
                limits,
                n_fine: bins.fine.len(),
                n_coarse: bins.coarse.len(),
                frac_area: decision.frac_area,
                wafer_type: decision.wafer_type,
            });
        }
        Ok(Classification {
            limits,
            corners,
            bins,
            frac_area: decision.frac_area,
            wafer_type: decision.wafer_type,
        })
    }
}

impl fmt::Debug for WaferClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaferClassifier")
            .field("cfg", &self.cfg)
            .field("r", &self.r)
            .field("big_r", &self.big_r)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
