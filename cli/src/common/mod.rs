//! # Lintstart Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! This module is the organizational entry point for the shared utilities used
//! by the command logic. It keeps cross-cutting concerns (filesystem access,
//! child processes, runtime inspection, terminal UI) apart from the
//! command-specific code in `commands::` and the infrastructure in `core::`.
//!
//! ## Architecture
//!
//! - **`fs`**: Reading/writing files, pretty JSON output, verbatim file copies.
//! - **`process`**: The `CommandRunner` seam and its shell-backed implementation.
//! - **`system`**: Node.js version detection and runtime capabilities.
//! - **`ui`**: Step progress, prompt providers, and user-facing status lines.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{fs::io, process::ShellRunner, system, ui};
//!
//! # async fn run_example(dir: &std::path::Path) -> crate::core::error::Result<()> {
//! let node_major = system::detect_node_major(&ShellRunner, dir).await;
//! io::write_string_to_file(&dir.join(".eslintignore"), "node_modules/\n")?;
//! ui::success("Generated .eslintignore");
//! # Ok(())
//! # }
//! ```
//!

/// Utilities for filesystem operations (I/O, copy).
pub mod fs;
/// Executing external commands through the `CommandRunner` trait.
pub mod process;
/// Runtime (Node.js) version inspection.
pub mod system;
/// Terminal user interface elements (progress, prompts, status lines).
pub mod ui;
