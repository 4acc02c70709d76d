//! # Lintstart Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! Filesystem helpers shared by the detector, the package-manager adapter and
//! the config generator.
//!
//! - **`copy`**: Verbatim file copies via `fs_extra` (TSLint template override).
//! - **`io`**: Directory creation, reading files to strings, and writing strings
//!   or pretty JSON to files with overwrite semantics.
//!
//! Callers import the specific submodule, e.g. `use crate::common::fs::io;`.
//!

/// Contains functions for copying files (e.g., `copy_file_overwrite`).
pub mod copy;
/// Contains basic file I/O operations (e.g., `ensure_dir_exists`, `write_string_to_file`).
pub mod io;
