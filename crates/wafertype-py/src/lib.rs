//! PyO3 bindings for selected `wafertype` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: plain floats, tuples, and lists in,
//!   integer codes out. Validation errors surface as `ValueError`.
//! - The classifier itself stays in Rust (`wafertype` crate); Python callers
//!   get a `WaferClassifier` class plus a few geometry helpers.

use pyo3::prelude::*;

mod classifier;
mod common;
mod geom;

#[pymodule]
fn wafertype_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<classifier::PyWaferClassifier>()?;
    geom::register(m)?;
    m.add("__version__", wafertype::VERSION)?;
    Ok(())
}
