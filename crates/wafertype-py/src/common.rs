use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use wafertype::api::{CfgError, ClassifyError};

pub fn map_cfg_err(err: CfgError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_classify_err(err: ClassifyError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
