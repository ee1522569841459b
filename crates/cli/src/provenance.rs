use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the command name and its resolved parameters.
pub struct Payload {
    pub command: String,
    pub params: Value,
}

impl Payload {
    pub fn new(command: impl Into<String>, params: Value) -> Self {
        Self {
            command: command.into(),
            params,
        }
    }
}

/// Write `<artifact>.provenance.json` with the code revision, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = sidecar_path(artifact);
    ensure_parent(&provenance_path)?;

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": code_revision(),
        "version": mandala::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

const SIDECAR_SUFFIX: &str = ".provenance.json";
const UNKNOWN_REV: &str = "unknown";

/// `frames/index.json` → `frames/index.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or_else(|| OsStr::new("artifact"))
        .to_os_string();
    name.push(SIDECAR_SUFFIX);
    artifact.with_file_name(name)
}

/// Revision recorded in sidecars: build-time `GIT_COMMIT`, then runtime
/// `GIT_COMMIT`, then `git rev-parse HEAD`, else `"unknown"`.
pub fn code_revision() -> String {
    non_empty(option_env!("GIT_COMMIT").map(str::to_owned))
        .or_else(|| non_empty(std::env::var("GIT_COMMIT").ok()))
        .or_else(git_head)
        .unwrap_or_else(|| UNKNOWN_REV.to_owned())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    non_empty(String::from_utf8(output.stdout).ok().map(|s| s.trim().to_owned()))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}
