//! Provenance sidecars: `<stem>.provenance.json` next to every table `run` writes.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of one sidecar file.
#[derive(Debug, Serialize)]
pub struct Sidecar<P: Serialize, S: Serialize> {
    pub code_rev: String,
    pub lib_version: &'static str,
    pub input: String,
    pub params: P,
    pub summary: S,
    pub outputs: Vec<String>,
}

impl<P: Serialize, S: Serialize> Sidecar<P, S> {
    pub fn new(input: &Path, output: &Path, params: P, summary: S) -> Self {
        Self {
            code_rev: current_git_rev(),
            lib_version: wafertype::VERSION,
            input: input.to_string_lossy().into_owned(),
            params,
            summary,
            outputs: vec![output.to_string_lossy().into_owned()],
        }
    }
}

/// Write `sidecar` next to `artifact` and return the sidecar path.
pub fn write_sidecar<P: Serialize, S: Serialize>(
    artifact: &Path,
    sidecar: &Sidecar<P, S>,
) -> Result<PathBuf> {
    let path = provenance_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/types.csv");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/types.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("types")),
            Path::new("types.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_and_summary() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("types.csv");
        let input = dir.path().join("wafers.csv");
        fs::write(&artifact, "x,y,z,type\n").unwrap();
        let sidecar = Sidecar::new(
            &input,
            &artifact,
            json!({"choice": 2, "cut_frac_area": 0.2}),
            json!({"rows": 0}),
        );
        let prov_path = write_sidecar(&artifact, &sidecar).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["input"], input.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["choice"], 2);
        assert_eq!(parsed["summary"]["rows"], 0);
        assert_eq!(parsed["lib_version"], wafertype::VERSION);
        assert!(parsed["code_rev"].is_string());
    }
}
