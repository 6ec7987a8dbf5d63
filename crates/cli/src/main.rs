use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use wafertype::api::WaferClassifier;

mod params;
mod provenance;
mod sink;

use params::ParamsFile;
use provenance::{write_sidecar, Sidecar};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Wafer type classification runner")]
struct Cmd {
    /// Forward classifier diagnostics to the log
    #[arg(long, global = true)]
    diagnostics: bool,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a single wafer centre and print the result as JSON
    Classify {
        #[arg(long)]
        params: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, allow_negative_numbers = true)]
        z: f64,
    },
    /// Print inner/outer radius limits over a z range as CSV
    Limits {
        #[arg(long)]
        params: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        z_from: f64,
        #[arg(long, allow_negative_numbers = true)]
        z_to: f64,
        #[arg(long, default_value_t = 10)]
        steps: usize,
    },
    /// Classify a CSV table of wafer centres (columns x, y, z)
    Run {
        #[arg(long)]
        params: PathBuf,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose || cmd.diagnostics {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Classify { params, x, y, z } => classify(&params, x, y, z, cmd.diagnostics),
        Action::Limits {
            params,
            z_from,
            z_to,
            steps,
        } => limits(&params, z_from, z_to, steps),
        Action::Run { params, input, out } => run(&params, &input, &out, cmd.diagnostics),
        Action::Report => report(),
    }
}

fn classify(params: &Path, x: f64, y: f64, z: f64, diagnostics: bool) -> Result<()> {
    let wc = ParamsFile::load(params)?.build(diagnostics)?;
    let c = wc
        .classify_detailed(x, y, z)
        .with_context(|| format!("classifying wafer at ({x}, {y}, {z})"))?;
    tracing::info!(x, y, z, code = c.wafer_type.code(), "classify");
    let obj = serde_json::json!({
        "position": [x, y, z],
        "limits": { "inner": c.limits.inner, "outer": c.limits.outer },
        "fine": c.bins.fine,
        "coarse": c.bins.coarse,
        "outside": c.bins.outside(),
        "frac_area": c.frac_area,
        "wafer_type": c.wafer_type.to_string(),
        "code": c.wafer_type.code(),
        "resolved": c.wafer_type.resolved_code(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn limits(params: &Path, z_from: f64, z_to: f64, steps: usize) -> Result<()> {
    if steps == 0 {
        bail!("--steps must be at least 1");
    }
    let wc = ParamsFile::load(params)?.build(false)?;
    println!("z,inner,outer");
    for i in 0..=steps {
        let z = z_from + (z_to - z_from) * (i as f64) / (steps as f64);
        let lim = wc.r_limits(z);
        println!("{z},{},{}", lim.inner, lim.outer);
    }
    Ok(())
}

/// Per-table counts of classification outcomes.
#[derive(Debug, Default, PartialEq, Serialize)]
struct TableSummary {
    rows: usize,
    skipped: usize,
    failed: usize,
    codes: BTreeMap<i32, usize>,
}

/// Append `type` (code) and `resolved` columns to a table with `x, y, z`.
///
/// Rows with a missing coordinate or a failed clip get nulls.
fn classify_table(df: &DataFrame, wc: &WaferClassifier) -> Result<(DataFrame, TableSummary)> {
    let column = |name: &str| -> Result<Vec<Option<f64>>> {
        let s = df
            .column(name)
            .with_context(|| format!("input is missing column `{name}`"))?
            .cast(&DataType::Float64)?;
        let ca = s.f64()?;
        let vals: Vec<Option<f64>> = ca.into_iter().collect();
        Ok(vals)
    };
    let (xs, ys, zs) = (column("x")?, column("y")?, column("z")?);

    let mut summary = TableSummary {
        rows: df.height(),
        ..Default::default()
    };
    let mut codes: Vec<Option<i32>> = Vec::with_capacity(df.height());
    let mut resolved: Vec<Option<i32>> = Vec::with_capacity(df.height());
    for (row, ((x, y), z)) in xs.into_iter().zip(ys).zip(zs).enumerate() {
        let (Some(x), Some(y), Some(z)) = (x, y, z) else {
            summary.skipped += 1;
            codes.push(None);
            resolved.push(None);
            continue;
        };
        match wc.classify(x, y, z) {
            Ok(t) => {
                *summary.codes.entry(t.code()).or_default() += 1;
                codes.push(Some(t.code()));
                resolved.push(Some(t.resolved_code()));
            }
            Err(err) => {
                tracing::warn!(row, x, y, z, error = %err, "classify_failed");
                summary.failed += 1;
                codes.push(None);
                resolved.push(None);
            }
        }
    }

    let mut out = df.clone();
    out.with_column(Series::new("type".into(), codes))?;
    out.with_column(Series::new("resolved".into(), resolved))?;
    Ok((out, summary))
}

fn run(params: &Path, input: &Path, out: &Path, diagnostics: bool) -> Result<()> {
    tracing::info!(params = %params.display(), input = %input.display(), out = %out.display(), "run");
    let params_file = ParamsFile::load(params)?;
    let wc = params_file.build(diagnostics)?;

    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .collect()?;
    let (mut table, summary) = classify_table(&df, &wc)?;
    tracing::info!(
        rows = summary.rows,
        skipped = summary.skipped,
        failed = summary.failed,
        "classified_table"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = std::fs::File::create(out)
        .with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut table)?;

    let sidecar = Sidecar::new(input, out, &params_file, &summary);
    let prov = write_sidecar(out, &sidecar)?;
    tracing::info!(provenance = %prov.display(), "wrote_provenance");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": wafertype::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn flat_params() -> ParamsFile {
        ParamsFile {
            rad100: vec![0.0, 0.0, 0.0, 0.0, 1.0],
            rad200: vec![0.0, 0.0, 0.0, 0.0, 2.0],
            wafer_size: 4.0,
            z_min: 0.0,
            choice: 2,
            corner_cut: 5,
            cut_frac_area: 0.2,
            diagnostics: false,
        }
    }

    #[test]
    fn table_gets_type_and_resolved_columns() {
        let wc = flat_params().build(false).unwrap();
        let df = df!(
            "x" => [Some(0.0), Some(7.5), Some(14.75), None, Some(100.0)],
            "y" => [0.0, 0.0, 12.0, 1.0, 100.0],
            "z" => [0.0, 0.0, 0.0, 0.0, 0.0]
        )
        .unwrap();
        let (out, summary) = classify_table(&df, &wc).unwrap();
        assert_eq!(out.width(), 5);
        let types: Vec<Option<i32>> = out.column("type").unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(types, vec![Some(0), Some(1), Some(-1), None, Some(2)]);
        let resolved: Vec<Option<i32>> =
            out.column("resolved").unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(resolved, vec![Some(0), Some(1), Some(1), None, Some(2)]);
        assert_eq!(summary.rows, 5);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.codes.values().sum::<usize>(), 4);
    }

    #[test]
    fn missing_column_is_named() {
        let wc = flat_params().build(false).unwrap();
        let df = df!("x" => [1.0], "y" => [2.0]).unwrap();
        let err = classify_table(&df, &wc).unwrap_err();
        assert!(err.to_string().contains("`z`"), "{err}");
    }

    #[test]
    fn run_writes_csv_and_sidecar() {
        let dir = tempdir().unwrap();
        let params = dir.path().join("params.json");
        std::fs::write(&params, serde_json::to_vec(&flat_params()).unwrap()).unwrap();
        let input = dir.path().join("wafers.csv");
        std::fs::write(&input, "x,y,z\n0,0,0\n7.25,0,0\n14.75,12,0\n").unwrap();
        let out = dir.path().join("out").join("types.csv");
        run(&params, &input, &out, false).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("x,y,z,type,resolved"));
        assert_eq!(lines.count(), 3);
        let prov = dir.path().join("out").join("types.provenance.json");
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(prov).unwrap()).unwrap();
        assert_eq!(doc["summary"]["rows"], 3);
        assert_eq!(doc["summary"]["codes"]["0"], 2);
        assert_eq!(doc["summary"]["codes"]["-1"], 1);
        assert_eq!(doc["params"]["wafer_size"], 4.0);
        assert_eq!(doc["input"], input.to_string_lossy().as_ref());
    }
}
