use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Contents of `<artifact stem>.provenance.json`.
#[derive(Serialize)]
struct Provenance<'a> {
    code_rev: String,
    hull2_version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    outputs: Vec<String>,
}

/// Write a provenance sidecar next to `artifact` recording the git revision,
/// library version, callsite and the parameters that produced it.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: &Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let callsite = Location::caller();
    let doc = Provenance {
        code_rev: current_git_rev(),
        hull2_version: hull2::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
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
