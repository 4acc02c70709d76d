//! # Lintstart Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the command logic of the lintstart CLI and makes it
//! accessible to the main application entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `init`: the setup pipeline (detection, dependency installation, config
//!   generation, validation). Its arguments are flattened into the top-level
//!   command line, so `lintstart --enhanced` runs it directly.
//!

/// The setup pipeline and its building blocks.
pub mod init;
