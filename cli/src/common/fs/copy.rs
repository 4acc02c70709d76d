//! # Lintstart Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Verbatim file copies. Used by the config generator when a user-supplied
//! TSLint template override is configured: the file is copied byte-for-byte
//! into the project, replacing whatever was there.
//!
//! ```rust
//! use crate::common::fs::copy;
//!
//! copy::copy_file_overwrite(Path::new("/templates/tslint.json"), &project.join("tslint.json"))?;
//! ```
//!
use crate::core::error::Result;
use std::path::Path;
use tracing::{debug, info};

/// Copies a single file from `source` to `target`, overwriting `target` if it exists.
///
/// This leverages `fs_extra::file::copy` with `overwrite` enabled. The target's
/// parent directory must already exist.
///
/// # Errors
///
/// Returns an `Err` if the source does not exist or the target cannot be written,
/// wrapped with context naming both paths.
pub fn copy_file_overwrite(source: &Path, target: &Path) -> Result<u64> {
    debug!("Copying file {:?} to {:?}", source, target);

    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;

    let bytes = fs_extra::file::copy(source, target, &options).map_err(|e| {
        anyhow::anyhow!(e).context(format!("Failed to copy file {:?} to {:?}", source, target))
    })?;

    info!("Copied {} bytes from {:?} to {:?}", bytes, source, target);
    Ok(bytes)
}
