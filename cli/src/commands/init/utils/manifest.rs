//! # Lintstart Manifest Access
//!
//! File: cli/src/commands/init/utils/manifest.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Reading and rewriting the project manifest (`package.json`). The manifest is
//! kept as a `serde_json::Value` with insertion order preserved, so rewriting it
//! only touches the keys lintstart changes.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use anyhow::Context;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Path of the manifest inside `dir`.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}

/// Reads and parses the manifest.
///
/// Returns `Ok(None)` when there is no manifest, and `Err` when it exists but is
/// unreadable, not valid JSON, or not a JSON object.
pub fn read_manifest(dir: &Path) -> Result<Option<Value>> {
    let path = manifest_path(dir);
    if !path.is_file() {
        return Ok(None);
    }
    let content = io::read_file_to_string(&path)?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    if !value.is_object() {
        anyhow::bail!("{} does not contain a JSON object", path.display());
    }
    Ok(Some(value))
}

/// Union of the `dependencies` and `devDependencies` keys.
pub fn dependency_names(manifest: &Value) -> BTreeSet<String> {
    ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|section| manifest.get(section).and_then(Value::as_object))
        .flat_map(|deps: &Map<String, Value>| deps.keys().cloned())
        .collect()
}
