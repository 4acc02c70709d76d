//! # Lintstart Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for lintstart. These components handle
//! configuration, error management, and templating.
//!
//! ## Architecture
//!
//! - `config`: Tool configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Rendering of generated `module.exports` config files
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{LintstartError, Result}; // For error handling
//! use crate::core::templating; // For rendering generated config modules
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
