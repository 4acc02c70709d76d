//! # Lintstart Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module renders the script-form configuration files lintstart writes
//! (`.eslintrc.js`, `.prettierrc.js`). Each one is a CommonJS module whose
//! export is the pretty-printed JSON document produced by the config generator.
//!
//! ## Architecture
//!
//! The rendering uses the Tera templating engine with a single embedded
//! template:
//! 1. The document is serialized with `serde_json::to_string_pretty` (2-space indent)
//! 2. The banner and body are inserted into `MODULE_TEMPLATE`
//! 3. Autoescaping is disabled since the output is JavaScript, not HTML
//!
//! Nothing time-dependent goes into the output, so rendering the same document
//! twice yields byte-identical files.
//!
//! ## Examples
//!
//! ```rust
//! let doc = serde_json::json!({ "semi": true, "singleQuote": true });
//! let content = templating::render_config_module("Generated by lintstart", &doc)?;
//! assert!(content.starts_with("// Generated by lintstart\nmodule.exports = {"));
//! ```
//!
use crate::core::error::{LintstartError, Result};
use anyhow::{anyhow, Context};
use serde_json::Value;
use tera::Tera;
use tracing::debug;

/// Prefix every rendered module starts its export with.
pub const MODULE_EXPORT_PREFIX: &str = "module.exports = ";

const MODULE_TEMPLATE: &str = "// {{ banner }}\nmodule.exports = {{ body }};\n";

/// Renders `document` as a CommonJS config module headed by a `//` banner line.
pub fn render_config_module(banner: &str, document: &Value) -> Result<String> {
    let body = serde_json::to_string_pretty(document)
        .context("Failed to serialize configuration document")?;

    let mut context = tera::Context::new();
    context.insert("banner", banner);
    context.insert("body", &body);

    let rendered = Tera::one_off(MODULE_TEMPLATE, &context, false).map_err(|e| {
        anyhow!(LintstartError::Template { source: e }).context("Tera rendering failed for config module")
    })?;
    debug!("Rendered config module ({} bytes)", rendered.len());
    Ok(rendered)
}
