//! Diagnostic side channel for the classifier.
//!
//! The classifier reports what it did to an injected `DiagnosticSink`
//! instead of printing. Records are for humans only; nothing in the
//! classification depends on whether or where they are recorded.

use std::sync::Mutex;

use crate::wafer::{Coeffs5, RadiusLimits, WaferType};

/// One diagnostic record.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Emitted once when a classifier is built with a sink.
    Initialized {
        wafer_size: f64,
        half_width: f64,
        corner_span: f64,
        choice: i32,
        corner_cut: u32,
        cut_frac_area: f64,
        z_min: f64,
        rad100: Coeffs5,
        rad200: Coeffs5,
    },
    /// Emitted for every successful classification.
    Classified {
        position: [f64; 3],
        limits: RadiusLimits,
        n_fine: usize,
        n_coarse: usize,
        frac_area: Option<f64>,
        wafer_type: WaferType,
    },
}

/// Receiver of diagnostic records. Shared across threads with the classifier.
///
/// A classifier built without a sink records nothing.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diag: &Diagnostic);
}

/// Keeps records in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain all records collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // Records are pushed whole, so a poisoned lock still holds a valid Vec.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diag: &Diagnostic) {
        self.lock().push(diag.clone());
    }
}
