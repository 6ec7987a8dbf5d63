//! Layer scan: classify every wafer of a hexagonal lattice at one z.
//!
//! Purpose
//! - Show the classifier on a whole layer and print how many wafers land in
//!   each type, for both rule sets.
//!
//! Lattice
//! - Centres tile the plane with the classifier's hexagon: neighbours in a
//!   row are `2r` apart, rows are `1.5·R` apart, odd rows shift by `r`.
//!
//! Usage: `cargo run -p wafertype --example layer_scan -- [z_mm]`

use std::collections::BTreeMap;

use wafertype::{WaferClassifier, WaferTypeCfg};

fn main() {
    let z: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3600.0);
    for (label, choice) in [("corner_count", 1), ("area_fraction", 2)] {
        let cfg = WaferTypeCfg::from_slices(
            &[0.0, 0.0, 1.0e-4, 0.25, -30.0],
            &[0.0, 0.0, 1.5e-4, 0.35, -20.0],
            166.44,
            3200.0,
            choice,
            4,
            0.2,
        )
        .expect("demo config is valid");
        let wc = WaferClassifier::new(cfg).expect("classifier");
        let lim = wc.r_limits(z);
        let (r, big_r) = (cfg.half_width(), cfg.corner_span());

        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        let mut failures = 0usize;
        let reach = lim.outer + 2.0 * big_r;
        let rows = (reach / (1.5 * big_r)).ceil() as i64;
        let cols = (reach / (2.0 * r)).ceil() as i64;
        for row in -rows..=rows {
            let y = row as f64 * 1.5 * big_r;
            let shift = if row.rem_euclid(2) == 1 { r } else { 0.0 };
            for col in -cols..=cols {
                let x = col as f64 * 2.0 * r + shift;
                match wc.type_code(x, y, z) {
                    Ok(code) => *counts.entry(code).or_default() += 1,
                    Err(_) => failures += 1,
                }
            }
        }
        println!(
            "rules={label} z={z:.1} inner={:.1} outer={:.1} wafers={} failures={failures}",
            lim.inner,
            lim.outer,
            counts.values().sum::<usize>()
        );
        for (code, n) in counts {
            println!("  type {code:>2}: {n}");
        }
    }
}
