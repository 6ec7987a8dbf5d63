use super::types::{RadiusLimits, WaferTypeCfg};

/// Length conversion applied to |z| before evaluating the polynomials (mm → cm).
pub const SCALE_IN: f64 = 0.1;
/// Length conversion applied to the evaluated radii (cm → mm).
pub const SCALE_OUT: f64 = 10.0;

/// Fine and coarse radius limits at `z`.
///
/// Only |z| matters, and it is clamped from below at `cfg.z_min`.
pub fn r_limits(cfg: &WaferTypeCfg, z: f64) -> RadiusLimits {
    let mut zz = z.abs();
    if zz < cfg.z_min {
        zz = cfg.z_min;
    }
    zz *= SCALE_IN;
    RadiusLimits {
        inner: cfg.rad100.horner(zz) * SCALE_OUT,
        outer: cfg.rad200.horner(zz) * SCALE_OUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wafer::types::Coeffs5;

    fn cfg(rad100: [f64; 5], rad200: [f64; 5], z_min: f64) -> WaferTypeCfg {
        WaferTypeCfg {
            rad100: Coeffs5(rad100),
            rad200: Coeffs5(rad200),
            wafer_size: 166.44,
            z_min,
            choice: 2,
            corner_cut: 5,
            cut_frac_area: 0.2,
        }
    }

    #[test]
    fn horner_order_is_leading_first() {
        // inner(zz) = 2·zz + 3 (cm), outer(zz) = zz² (cm); z = 100 mm → zz = 10 cm.
        let c = cfg([0.0, 0.0, 0.0, 2.0, 3.0], [0.0, 0.0, 1.0, 0.0, 0.0], 0.0);
        let lim = r_limits(&c, 100.0);
        assert!((lim.inner - 230.0).abs() < 1e-9);
        assert!((lim.outer - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn sign_of_z_is_ignored() {
        let c = cfg([1e-6, -2e-4, 3e-3, 0.25, -30.0], [0.0, 1e-5, 1e-4, 0.3, -10.0], 100.0);
        assert_eq!(r_limits(&c, 3500.0), r_limits(&c, -3500.0));
    }

    #[test]
    fn small_z_is_clamped() {
        let c = cfg([0.0, 0.0, 1e-4, 0.25, -30.0], [0.0, 0.0, 1.5e-4, 0.35, -20.0], 3200.0);
        let at_min = r_limits(&c, 3200.0);
        assert_eq!(r_limits(&c, 0.0), at_min);
        assert_eq!(r_limits(&c, 1234.5), at_min);
        assert_eq!(r_limits(&c, -3199.9), r_limits(&c, -3200.0));
        assert!(r_limits(&c, 3300.0).inner > at_min.inner);
    }
}
