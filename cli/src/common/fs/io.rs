//! # Lintstart Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output operations used when
//! reading the project manifest and writing generated configuration. It provides
//! wrappers around `std::fs` that add context to every error and log what was
//! written.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing; errors if
//!   the path exists but is not a directory. Used for `.vscode/`.
//! - **`read_file_to_string`**: `fs::read_to_string` with context.
//! - **`write_string_to_file`**: Ensures the parent directory exists, then writes,
//!   overwriting any existing file unconditionally.
//! - **`write_json_pretty`**: Serializes a JSON value with 2-space indentation and a
//!   trailing newline (the layout npm itself uses for `package.json`).
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::write_string_to_file(&dir.join(".eslintignore"), "node_modules/\n")?;
//! io::write_json_pretty(&dir.join(".vscode/settings.json"), &settings)?;
//! let manifest = io::read_file_to_string(&dir.join("package.json"))?;
//! ```
//!
use crate::core::error::{LintstartError, Result};
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory, including
/// any necessary parent directories (similar to `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(LintstartError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// The parent directory of `path` is created first if needed.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the write fails.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).map_err(|e| {
        anyhow::Error::new(e).context(LintstartError::FileSystem(format!(
            "Failed to write to file {:?}",
            path
        )))
    })?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Writes `value` as pretty JSON (2-space indent) followed by a newline.
pub fn write_json_pretty(path: &Path, value: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize JSON for {:?}", path))?;
    content.push('\n');
    write_string_to_file(path, &content)
}
