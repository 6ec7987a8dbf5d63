//! `WaferClassifier` exposed as a Python class.

use pyo3::prelude::*;
use wafertype::api::{WaferClassifier, WaferTypeCfg};

use crate::common::{map_cfg_err, map_classify_err};

#[pyclass(name = "WaferClassifier", frozen)]
pub struct PyWaferClassifier {
    inner: WaferClassifier,
}

#[pymethods]
impl PyWaferClassifier {
    #[new]
    #[pyo3(signature = (rad100, rad200, wafer_size, z_min, choice = 2, corner_cut = 5, cut_frac_area = 0.2))]
    fn new(
        rad100: Vec<f64>,
        rad200: Vec<f64>,
        wafer_size: f64,
        z_min: f64,
        choice: i32,
        corner_cut: u32,
        cut_frac_area: f64,
    ) -> PyResult<Self> {
        let cfg = WaferTypeCfg::from_slices(
            &rad100,
            &rad200,
            wafer_size,
            z_min,
            choice,
            corner_cut,
            cut_frac_area,
        )
        .map_err(map_cfg_err)?;
        let inner = WaferClassifier::new(cfg).map_err(map_cfg_err)?;
        Ok(Self { inner })
    }

    /// Integer type code of the wafer centred at `(x, y, z)`.
    fn classify(&self, x: f64, y: f64, z: f64) -> PyResult<i32> {
        self.inner.type_code(x, y, z).map_err(map_classify_err)
    }

    /// Collapsed 0/1/2 category of the wafer centred at `(x, y, z)`.
    fn resolved(&self, x: f64, y: f64, z: f64) -> PyResult<i32> {
        self.inner
            .classify(x, y, z)
            .map(|t| t.resolved_code())
            .map_err(map_classify_err)
    }

    /// Integer type codes for a list of `(x, y, z)` centres.
    fn classify_many(&self, points: Vec<(f64, f64, f64)>) -> PyResult<Vec<i32>> {
        let points: Vec<[f64; 3]> = points.into_iter().map(|(x, y, z)| [x, y, z]).collect();
        self.inner.type_codes(&points).map_err(map_classify_err)
    }

    /// `(inner, outer)` radius limits at `z`.
    fn r_limits(&self, z: f64) -> (f64, f64) {
        let lim = self.inner.r_limits(z);
        (lim.inner, lim.outer)
    }

    /// The six hexagon corners of a wafer centred at `(x, y)`.
    fn corners(&self, x: f64, y: f64) -> Vec<(f64, f64)> {
        self.inner.corners(x, y).iter().map(|c| (c.x, c.y)).collect()
    }

    fn __repr__(&self) -> String {
        let cfg = self.inner.cfg();
        format!(
            "WaferClassifier(wafer_size={}, z_min={}, choice={}, corner_cut={}, cut_frac_area={})",
            cfg.wafer_size, cfg.z_min, cfg.choice, cfg.corner_cut, cfg.cut_frac_area
        )
    }
}
