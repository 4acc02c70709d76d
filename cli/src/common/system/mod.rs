//! # Lintstart System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! Runtime inspection for the host Node.js installation. The detected major
//! version decides whether the pipeline runs with modern dependency ranges or
//! pins every linter package to the last releases that still support older
//! runtimes.
//!
//! ## Architecture
//!
//! - **`parse_major_version`**: pure parsing of strings like `v18.17.1` / `20.3.0`.
//! - **`detect_node_major`**: runs `node --version` through a `CommandRunner`,
//!   falling back to `DEFAULT_NODE_MAJOR` when node is missing or the output is odd.
//! - **`RuntimeCapabilities`**: the major version plus the single `modern` flag the
//!   rest of the pipeline branches on.
//!
use crate::common::process::CommandRunner;
use std::path::Path;
use tracing::{debug, warn};

/// Assumed major version when `node --version` cannot be used.
pub const DEFAULT_NODE_MAJOR: u32 = 16;

/// What the host runtime supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeCapabilities {
    pub node_major: u32,
    /// `node_major` is at or above the configured minimum.
    pub modern: bool,
}

impl RuntimeCapabilities {
    pub fn new(node_major: u32, min_node_version: u32) -> Self {
        Self {
            node_major,
            modern: node_major >= min_node_version,
        }
    }
}

/// Parses the major component of a runtime version string.
///
/// Accepts an optional leading `v` and surrounding whitespace. Returns `None`
/// when the string does not start with a number.
pub fn parse_major_version(version: &str) -> Option<u32> {
    let trimmed = version.trim();
    let digits: String = trimmed
        .strip_prefix('v')
        .unwrap_or(trimmed)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Detects the installed Node.js major version. Never fails.
pub async fn detect_node_major(runner: &dyn CommandRunner, cwd: &Path) -> u32 {
    match runner.run("node --version", cwd).await {
        Ok(out) if out.success => match parse_major_version(&out.stdout) {
            Some(major) => {
                debug!("Detected Node.js major version {}", major);
                major
            }
            None => {
                warn!(
                    "Unrecognised `node --version` output '{}', assuming Node {}",
                    out.stdout.trim(),
                    DEFAULT_NODE_MAJOR
                );
                DEFAULT_NODE_MAJOR
            }
        },
        Ok(out) => {
            warn!(
                "`node --version` failed ({}), assuming Node {}",
                out.diagnostic(),
                DEFAULT_NODE_MAJOR
            );
            DEFAULT_NODE_MAJOR
        }
        Err(e) => {
            warn!("Could not run node ({:#}), assuming Node {}", e, DEFAULT_NODE_MAJOR);
            DEFAULT_NODE_MAJOR
        }
    }
}
