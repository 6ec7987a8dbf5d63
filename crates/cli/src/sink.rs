//! `tracing` adapter for classifier diagnostics.

use wafertype::api::{Diagnostic, DiagnosticSink};

/// Forwards every record to `tracing::debug!` with structured fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diag: &Diagnostic) {
        match diag {
            Diagnostic::Initialized {
                wafer_size,
                half_width,
                corner_span,
                choice,
                corner_cut,
                cut_frac_area,
                z_min,
                rad100,
                rad200,
            } => tracing::debug!(
                wafer_size = *wafer_size,
                r = *half_width,
                big_r = *corner_span,
                choice = *choice,
                corner_cut = *corner_cut,
                cut_frac_area = *cut_frac_area,
                z_min = *z_min,
                rad100 = ?rad100.0,
                rad200 = ?rad200.0,
                "classifier_init"
            ),
            Diagnostic::Classified {
                position,
                limits,
                n_fine,
                n_coarse,
                frac_area,
                wafer_type,
            } => tracing::debug!(
                x = position[0],
                y = position[1],
                z = position[2],
                inner = limits.inner,
                outer = limits.outer,
                n_fine = *n_fine,
                n_coarse = *n_coarse,
                frac_area = ?frac_area,
                code = wafer_type.code(),
                wafer_type = %wafer_type,
                "classified"
            ),
        }
    }
}
