//! # Lintstart Config Generator
//!
//! File: cli/src/commands/init/utils/generator.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a preset, a framework overlay and a project profile into the final
//! configuration documents, then writes them into the project directory.
//!
//! ## Architecture
//!
//! Generation is split in two:
//!
//! 1. **`resolve`** (pure): preset lookup (unknown names fall back to
//!    `standard`), overlay merge, profile pruning, TypeScript parser injection.
//!    The same inputs always give the same `ResolvedConfig`.
//! 2. **`write`**: serializes the `ResolvedConfig` and writes every file,
//!    overwriting existing files without merging. The first write error aborts;
//!    files written before it stay on disk.
//!
//! Merge order for the lint block:
//!
//! - preset entries, then overlay entries (`extends` / `plugins` concatenate,
//!   `env` / `parserOptions` / `rules` merge key-wise with the overlay winning);
//! - JavaScript projects lose `@typescript-eslint` extends and rules; projects
//!   without React lose the `react`, `react-hooks` and `jsx-a11y` extends,
//!   plugins and rules (those plugins are not installed);
//! - TypeScript projects then get `parser` and `parserOptions.project /
//!   ecmaVersion / sourceType` set last, so nothing above can override them.
//!
//! ## Files
//!
//! | File                    | Content                                      |
//! |-------------------------|----------------------------------------------|
//! | `.eslintrc.js`          | resolved lint block as a `module.exports` module |
//! | `.prettierrc.js`        | preset Prettier options as a module          |
//! | `.eslintignore`         | fixed ignore patterns                        |
//! | `.prettierignore`       | fixed ignore patterns                        |
//! | `.vscode/settings.json` | format-on-save, fix-on-save, validated languages |
//! | `tslint.json`           | optional, TypeScript only, copied verbatim   |
//!
use super::presets::{self, LintRuleset};
use super::project_detector::{Framework, Language, ProjectProfile};
use crate::common::fs::{copy, io};
use crate::common::ui;
use crate::core::error::Result;
use crate::core::templating;
use anyhow::Context;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ESLINT_CONFIG_FILE: &str = ".eslintrc.js";
pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc.js";
pub const ESLINT_IGNORE_FILE: &str = ".eslintignore";
pub const PRETTIER_IGNORE_FILE: &str = ".prettierignore";
pub const VSCODE_SETTINGS_FILE: &str = ".vscode/settings.json";
pub const TSLINT_CONFIG_FILE: &str = "tslint.json";

/// Parser injected for TypeScript projects.
pub const TYPESCRIPT_PARSER: &str = "@typescript-eslint/parser";

const BANNER: &str = "Generated by lintstart. Re-run lintstart to regenerate.";

const ESLINT_IGNORE: [&str; 9] = [
    "node_modules/",
    "dist/",
    "build/",
    "coverage/",
    "*.min.js",
    "*.bundle.js",
    ".next/",
    "out/",
    "public/",
];

const PRETTIER_IGNORE: [&str; 11] = [
    "node_modules/",
    "dist/",
    "build/",
    "coverage/",
    "*.min.js",
    "*.bundle.js",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    ".next/",
    "out/",
];

const BUNDLED_TSLINT: &str = include_str!("../../../../templates/tslint.json");

/// Options that are not part of the preset/profile merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    /// Also emit `tslint.json` (TypeScript projects only).
    pub include_tslint: bool,
    /// Template copied instead of the bundled `tslint.json`.
    pub tslint_template: Option<PathBuf>,
}

/// # Resolved Config (`ResolvedConfig`)
///
/// Everything that ends up on disk, fully materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub preset: &'static str,
    pub eslint: LintRuleset,
    pub prettier: Map<String, Value>,
    pub eslint_ignore: Vec<String>,
    pub prettier_ignore: Vec<String>,
    pub editor_settings: Value,
}

/// # Resolve Configuration (`resolve`)
///
/// Pure merge of preset, framework overlay and profile constraints. See the
/// module documentation for the order. Never fails.
pub fn resolve(profile: &ProjectProfile, preset_name: &str, framework: Framework) -> ResolvedConfig {
    let preset = presets::preset(preset_name);
    if preset.name != preset_name {
        debug!("Preset '{}' not found, using '{}'", preset_name, preset.name);
    }

    let mut eslint = preset.eslint;
    if let Some(overlay) = presets::framework_overlay(framework) {
        eslint.merge(&overlay);
    }

    if profile.language == Language::JavaScript {
        prune(&mut eslint, |entry| entry.contains("@typescript-eslint"), |rule| {
            rule.starts_with("@typescript-eslint/")
        });
    }
    if !profile.framework.uses_react() {
        // React-only plugins are not installed for these frameworks.
        prune(
            &mut eslint,
            |entry| REACT_PLUGINS.iter().any(|name| entry.starts_with(&format!("plugin:{}/", name))),
            |rule| REACT_PLUGINS.iter().any(|name| rule.starts_with(&format!("{}/", name))),
        );
        eslint
            .plugins
            .retain(|plugin| !REACT_PLUGINS.contains(&plugin.as_str()));
    }

    if profile.language == Language::TypeScript {
        eslint.parser = Some(TYPESCRIPT_PARSER.to_string());
        eslint
            .parser_options
            .insert("project".to_string(), json!("./tsconfig.json"));
        eslint
            .parser_options
            .insert("ecmaVersion".to_string(), json!("latest"));
        eslint
            .parser_options
            .insert("sourceType".to_string(), json!("module"));
    }

    ResolvedConfig {
        preset: preset.name,
        eslint,
        prettier: preset.prettier,
        eslint_ignore: ESLINT_IGNORE.iter().map(|s| s.to_string()).collect(),
        prettier_ignore: PRETTIER_IGNORE.iter().map(|s| s.to_string()).collect(),
        editor_settings: editor_settings(),
    }
}

/// Plugin names whose `eslint-plugin-*` packages are only installed for React-based projects.
const REACT_PLUGINS: [&str; 3] = ["react", "react-hooks", "jsx-a11y"];

fn prune(eslint: &mut LintRuleset, drop_extends: impl Fn(&str) -> bool, drop_rule: impl Fn(&str) -> bool) {
    eslint.extends.retain(|entry| !drop_extends(entry.as_str()));
    eslint.rules.retain(|rule, _| !drop_rule(rule.as_str()));
}

fn editor_settings() -> Value {
    json!({
        "editor.defaultFormatter": "esbenp.prettier-vscode",
        "editor.formatOnSave": true,
        "editor.codeActionsOnSave": {
            "source.fixAll.eslint": true
        },
        "eslint.validate": [
            "javascript",
            "javascriptreact",
            "typescript",
            "typescriptreact"
        ],
        "typescript.preferences.importModuleSpecifier": "relative"
    })
}

/// # Write Configuration Files (`write`)
///
/// Writes every file of `resolved` into `dir`, overwriting existing files.
/// `tslint.json` is written only for TypeScript projects with
/// `options.include_tslint`. Returns the written paths in order.
///
/// # Errors
///
/// The first file that cannot be rendered or written aborts the call.
pub fn write(
    resolved: &ResolvedConfig,
    profile: &ProjectProfile,
    dir: &Path,
    options: &GenerateOptions,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let eslint_doc = serde_json::to_value(&resolved.eslint).context("Failed to serialize the ESLint config")?;
    let path = dir.join(ESLINT_CONFIG_FILE);
    io::write_string_to_file(&path, &templating::render_config_module(BANNER, &eslint_doc)?)?;
    ui::success(&format!("Generated {}", ESLINT_CONFIG_FILE));
    written.push(path);

    if options.include_tslint && profile.language == Language::TypeScript {
        let path = dir.join(TSLINT_CONFIG_FILE);
        write_tslint(&path, dir, options.tslint_template.as_deref())?;
        ui::success(&format!("Generated {}", TSLINT_CONFIG_FILE));
        ui::warn_user("TSLint is deprecated; prefer ESLint with @typescript-eslint");
        written.push(path);
    }

    let prettier_doc = Value::Object(resolved.prettier.clone());
    let path = dir.join(PRETTIER_CONFIG_FILE);
    io::write_string_to_file(&path, &templating::render_config_module(BANNER, &prettier_doc)?)?;
    ui::success(&format!("Generated {}", PRETTIER_CONFIG_FILE));
    written.push(path);

    for (name, lines) in [
        (ESLINT_IGNORE_FILE, &resolved.eslint_ignore),
        (PRETTIER_IGNORE_FILE, &resolved.prettier_ignore),
    ] {
        let path = dir.join(name);
        io::write_string_to_file(&path, &ignore_file_content(lines))?;
        ui::success(&format!("Generated {}", name));
        written.push(path);
    }

    let path = dir.join(VSCODE_SETTINGS_FILE);
    io::write_json_pretty(&path, &resolved.editor_settings)?;
    ui::success(&format!("Generated {}", VSCODE_SETTINGS_FILE));
    written.push(path);

    info!("Wrote {} configuration files to {}", written.len(), dir.display());
    Ok(written)
}

/// # Generate (`generate`)
///
/// `resolve` followed by `write`.
pub fn generate(
    profile: &ProjectProfile,
    preset_name: &str,
    framework: Framework,
    dir: &Path,
    options: &GenerateOptions,
) -> Result<(ResolvedConfig, Vec<PathBuf>)> {
    let resolved = resolve(profile, preset_name, framework);
    let written = write(&resolved, profile, dir, options)?;
    Ok((resolved, written))
}

fn ignore_file_content(lines: &[String]) -> String {
    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Copies the configured template, or writes the bundled one when no override
/// is configured or the override is missing.
fn write_tslint(target: &Path, dir: &Path, template: Option<&Path>) -> Result<()> {
    match template.map(|t| dir.join(t)) {
        Some(source) if source.is_file() => {
            copy::copy_file_overwrite(&source, target)?;
        }
        Some(source) => {
            ui::warn_user(&format!(
                "TSLint template {} not found; using the bundled template",
                source.display()
            ));
            io::write_string_to_file(target, BUNDLED_TSLINT)?;
        }
        None => io::write_string_to_file(target, BUNDLED_TSLINT)?,
    }
    Ok(())
}
