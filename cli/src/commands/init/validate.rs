//! # Lintstart Config Validation
//!
//! File: cli/src/commands/init/validate.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `ValidateConfigs` step. Every generated file is checked structurally;
//! generated code is never executed.
//!
//! - **`.js` modules**: the `//` comment lines are dropped, the text must then be
//!   `module.exports = <JSON object>;`, and the object must carry the keys its
//!   tool needs with the right types.
//! - **`.json` files**: must parse to a JSON object.
//! - **ignore files**: must contain at least one pattern.
//!
//! A failed check is a `LintstartError::Validation`, reported as a generation
//! failure even though the file exists on disk.
//!
use crate::commands::init::utils::generator::{ESLINT_CONFIG_FILE, PRETTIER_CONFIG_FILE};
use crate::common::fs::io;
use crate::common::ui;
use crate::core::error::{LintstartError, Result};
use crate::core::templating::MODULE_EXPORT_PREFIX;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

const TRAILING_COMMA_VALUES: [&str; 3] = ["all", "es5", "none"];
const ARROW_PARENS_VALUES: [&str; 2] = ["always", "avoid"];

fn invalid(file: &str, reason: impl Into<String>) -> anyhow::Error {
    LintstartError::Validation {
        file: file.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// # Validate Generated Files (`validate_configs`)
///
/// Checks every path in `files` (as returned by the generator). `dir` is only
/// used to display paths relative to the project.
///
/// # Errors
///
/// The first missing or malformed file.
pub fn validate_configs(dir: &Path, files: &[PathBuf]) -> Result<()> {
    for path in files {
        let display = path
            .strip_prefix(dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        validate_file(path, &display)?;
        ui::success(&format!("{} passed validation", display));
    }
    Ok(())
}

fn validate_file(path: &Path, display: &str) -> Result<()> {
    if !path.is_file() {
        return Err(invalid(display, "file was not generated"));
    }
    let content = io::read_file_to_string(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let shown = display;
    debug!("Validating {} ({} bytes)", shown, content.len());

    if file_name.ends_with(".js") {
        let document = parse_config_module(&content).map_err(|reason| invalid(display, reason))?;
        let checked = match file_name.as_str() {
            ESLINT_CONFIG_FILE => check_eslint(&document),
            PRETTIER_CONFIG_FILE => check_prettier(&document),
            _ => Ok(()),
        };
        checked.map_err(|reason| invalid(display, reason))
    } else if file_name.ends_with(".json") {
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(_)) => Ok(()),
            Ok(_) => Err(invalid(display, "expected a JSON object")),
            Err(e) => Err(invalid(display, format!("invalid JSON: {}", e))),
        }
    } else if content.lines().all(|line| line.trim().is_empty()) {
        Err(invalid(display, "ignore file has no patterns"))
    } else {
        Ok(())
    }
}

/// Extracts the exported object from a `module.exports = {...};` module.
fn parse_config_module(content: &str) -> std::result::Result<Map<String, Value>, String> {
    let code: String = content
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");
    let body = code
        .trim()
        .strip_prefix(MODULE_EXPORT_PREFIX)
        .ok_or_else(|| format!("expected the module to start with `{}`", MODULE_EXPORT_PREFIX.trim_end()))?;
    let body = body
        .trim_end()
        .strip_suffix(';')
        .ok_or("missing `;` after the exported object")?;
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("the export is not an object".to_string()),
        Err(e) => Err(format!("the export is not a valid object literal: {}", e)),
    }
}

fn check_eslint(doc: &Map<String, Value>) -> std::result::Result<(), String> {
    match doc.get("extends") {
        Some(Value::Array(items)) if items.iter().all(Value::is_string) => {}
        Some(_) => return Err("`extends` must be an array of strings".into()),
        None => return Err("missing `extends`".into()),
    }
    if !doc.get("rules").map_or(false, Value::is_object) {
        return Err("missing `rules` object".into());
    }
    for key in ["env", "parserOptions"] {
        if doc.get(key).map_or(false, |v| !v.is_object()) {
            return Err(format!("`{}` must be an object", key));
        }
    }
    if doc.get("plugins").map_or(false, |v| !v.is_array()) {
        return Err("`plugins` must be an array".into());
    }
    if doc.get("parser").map_or(false, |v| !v.is_string()) {
        return Err("`parser` must be a string".into());
    }
    Ok(())
}

fn check_prettier(doc: &Map<String, Value>) -> std::result::Result<(), String> {
    for key in ["printWidth", "tabWidth"] {
        if doc.get(key).map_or(false, |v| !v.is_u64()) {
            return Err(format!("`{}` must be a positive integer", key));
        }
    }
    for key in ["semi", "singleQuote", "bracketSpacing"] {
        if doc.get(key).map_or(false, |v| !v.is_boolean()) {
            return Err(format!("`{}` must be a boolean", key));
        }
    }
    check_enum(doc, "trailingComma", &TRAILING_COMMA_VALUES)?;
    check_enum(doc, "arrowParens", &ARROW_PARENS_VALUES)
}

fn check_enum(doc: &Map<String, Value>, key: &str, allowed: &[&str]) -> std::result::Result<(), String> {
    match doc.get(key) {
        None => Ok(()),
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => Ok(()),
        Some(other) => Err(format!("`{}` must be one of {:?}, found {}", key, allowed, other)),
    }
}
