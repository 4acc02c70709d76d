//! # Lintstart Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout lintstart. It follows
//! the same two-layer approach as the rest of the application:
//! - `LintstartError`: A custom error enum using `thiserror` for the failures
//!   the pipeline needs to recognise (install failures, validation failures, ...)
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so callers can attach
//!   context freely while propagating.
//!
//! ## Error Taxonomy
//!
//! Only some failures abort a run. Registry, removal and auto-format failures
//! are logged as warnings by the pipeline and never surface as errors. The
//! variants here are the ones that do reach `main`:
//! - `InstallFailed`: the dependency install command exited unsuccessfully
//! - `FileSystem`: a generated file could not be written
//! - `Validation`: a generated file does not have the expected structure
//! - `Config` / `Prompt` / `Template`: setup problems before or during generation
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! return Err(LintstartError::Validation {
//!     file: ".eslintrc.js".into(),
//!     reason: "missing `rules` object".into(),
//! })?;
//!
//! // Check for an install failure at the top level
//! if let Some(LintstartError::InstallFailed { .. }) = err.downcast_ref::<LintstartError>() {
//!     // ...
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the lintstart application.
#[derive(Error, Debug)]
pub enum LintstartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },

    #[error("Dependency installation with {manager} failed: {output}")]
    InstallFailed { manager: String, output: String },

    #[error("Generated file '{file}' failed validation: {reason}")]
    Validation { file: String, reason: String },

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
