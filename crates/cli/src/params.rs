//! Parameter files: JSON description of one classifier configuration.
//!
//! ```json
//! { "rad100": [0, 0, 1e-4, 0.25, -30], "rad200": [0, 0, 1.5e-4, 0.35, -20],
//!   "wafer_size": 166.44, "z_min": 3200, "choice": 2, "corner_cut": 5,
//!   "cut_frac_area": 0.2, "diagnostics": false }
//! ```
//! `choice`, `corner_cut`, `cut_frac_area`, and `diagnostics` may be omitted.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wafertype::api::{CfgError, WaferClassifier, WaferTypeCfg};

use crate::sink::TracingSink;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamsFile {
    pub rad100: Vec<f64>,
    pub rad200: Vec<f64>,
    pub wafer_size: f64,
    pub z_min: f64,
    #[serde(default = "default_choice")]
    pub choice: i32,
    #[serde(default = "default_corner_cut")]
    pub corner_cut: u32,
    #[serde(default = "default_cut_frac_area")]
    pub cut_frac_area: f64,
    /// Forward classifier diagnostics to the log.
    #[serde(default)]
    pub diagnostics: bool,
}

fn default_choice() -> i32 {
    2
}

fn default_corner_cut() -> u32 {
    5
}

fn default_cut_frac_area() -> f64 {
    0.2
}

impl ParamsFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn to_cfg(&self) -> Result<WaferTypeCfg, CfgError> {
        WaferTypeCfg::from_slices(
            &self.rad100,
            &self.rad200,
            self.wafer_size,
            self.z_min,
            self.choice,
            self.corner_cut,
            self.cut_frac_area,
        )
    }

    /// Classifier for these parameters; `force_diagnostics` overrides the file flag.
    pub fn build(&self, force_diagnostics: bool) -> Result<WaferClassifier> {
        let cfg = self.to_cfg().context("invalid classifier parameters")?;
        let wc = if self.diagnostics || force_diagnostics {
            WaferClassifier::with_sink(cfg, Arc::new(TracingSink))?
        } else {
            WaferClassifier::new(cfg)?
        };
        Ok(wc)
    }
}
