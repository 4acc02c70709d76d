//! # Lintstart Package Manager Adapter
//!
//! File: cli/src/commands/init/utils/package_manager.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Detects which package manager governs the project (by lockfile) and drives
//! it: registry configuration, dependency removal and installation, running a
//! script, and adding the lint/format scripts to `package.json`.
//!
//! ## Architecture
//!
//! - **`PackageManagerKind`**: npm / yarn / pnpm, plus the pure command-line
//!   builders for each operation. Keeping these pure makes the exact command
//!   text testable without spawning anything.
//! - **`PackageManager`**: a kind bound to a project directory and a
//!   `CommandRunner`. Each operation runs exactly one command, once.
//!
//! Failure policy: registry and removal failures are warnings; an install
//! failure is an `InstallFailed` error carrying the command's diagnostic output.
//!
use super::dependencies::DependencySet;
use super::manifest;
use crate::common::fs::io;
use crate::common::process::{quote_arg, CommandOutput, CommandRunner};
use crate::common::ui;
use crate::core::error::{LintstartError, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Lockfiles in detection order; the first one present wins.
const LOCKFILES: [(&str, PackageManagerKind); 2] = [
    ("yarn.lock", PackageManagerKind::Yarn),
    ("pnpm-lock.yaml", PackageManagerKind::Pnpm),
];

const LINT_COMMAND: &str = "eslint . --ext .js,.jsx,.ts,.tsx";
const FORMAT_GLOB: &str = "\"**/*.{js,jsx,ts,tsx,json,css,md}\"";

/// The four manifest scripts, in insertion order.
pub fn lint_scripts() -> [(&'static str, String); 4] {
    [
        ("lint", LINT_COMMAND.to_string()),
        ("lint:fix", format!("{} --fix", LINT_COMMAND)),
        ("format", format!("prettier --write {}", FORMAT_GLOB)),
        ("format:check", format!("prettier --check {}", FORMAT_GLOB)),
    ]
}

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManagerKind {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManagerKind {
    /// Detects the manager from lockfiles in `dir`, defaulting to npm.
    pub fn detect(dir: &Path) -> Self {
        let kind = LOCKFILES
            .iter()
            .find(|(lockfile, _)| dir.join(lockfile).is_file())
            .map(|(_, kind)| *kind)
            .unwrap_or(PackageManagerKind::Npm);
        debug!("Detected package manager: {}", kind);
        kind
    }

    /// Executable name.
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Pnpm => "pnpm",
        }
    }

    pub fn install_subcommand(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "install",
            PackageManagerKind::Yarn | PackageManagerKind::Pnpm => "add",
        }
    }

    pub fn dev_flag(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "--save-dev",
            PackageManagerKind::Yarn | PackageManagerKind::Pnpm => "--dev",
        }
    }

    /// `<pm> config set registry <url>`
    pub fn registry_command(&self, url: &str) -> String {
        format!("{} config set registry {}", self.binary(), quote_arg(url))
    }

    /// `<pm> <install|add> <specifiers...> [dev flag]`
    pub fn install_command(&self, deps: &DependencySet, dev: bool) -> String {
        let mut parts = vec![self.binary().to_string(), self.install_subcommand().to_string()];
        parts.extend(deps.specifiers().iter().map(|s| quote_arg(s)));
        if dev {
            parts.push(self.dev_flag().to_string());
        }
        parts.join(" ")
    }

    /// `<pm> remove <names...>`
    pub fn remove_command(&self, names: &[&str]) -> String {
        let mut parts = vec![self.binary().to_string(), "remove".to_string()];
        parts.extend(names.iter().map(|name| quote_arg(name)));
        parts.join(" ")
    }

    /// `<pm> run <script>`
    pub fn run_script_command(&self, script: &str) -> String {
        format!("{} run {}", self.binary(), quote_arg(script))
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// # Package Manager (`PackageManager`)
///
/// A detected package manager bound to a project directory.
pub struct PackageManager {
    kind: PackageManagerKind,
    dir: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl PackageManager {
    pub fn new(kind: PackageManagerKind, dir: &Path, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            kind,
            dir: dir.to_path_buf(),
            runner,
        }
    }

    /// Detects the kind from `dir`'s lockfiles and binds it.
    pub fn detect(dir: &Path, runner: Arc<dyn CommandRunner>) -> Self {
        Self::new(PackageManagerKind::detect(dir), dir, runner)
    }

    pub fn kind(&self) -> PackageManagerKind {
        self.kind
    }

    async fn run(&self, command: &str) -> Result<CommandOutput> {
        self.runner.run(command, &self.dir).await
    }

    /// Points the manager at `url`. Never fails; a failure becomes a warning.
    /// Returns whether the registry was set.
    pub async fn set_registry(&self, url: &str) -> bool {
        let command = self.kind.registry_command(url);
        match self.run(&command).await {
            Ok(out) if out.success => {
                ui::success(&format!("Set the {} registry to {}", self.kind, url));
                true
            }
            Ok(out) => {
                debug!("Registry command failed: {}", out.diagnostic());
                ui::warn_user("Could not set the registry; switch it manually if you hit network issues");
                false
            }
            Err(e) => {
                debug!("Registry command could not start: {:#}", e);
                ui::warn_user("Could not set the registry; switch it manually if you hit network issues");
                false
            }
        }
    }

    /// Removes `names`. Best effort: missing packages are not an error, so any
    /// failure only produces a warning. Returns whether the removal succeeded.
    pub async fn remove(&self, names: &[&str]) -> bool {
        if names.is_empty() {
            return true;
        }
        let command = self.kind.remove_command(names);
        let succeeded = match self.run(&command).await {
            Ok(out) if out.success => true,
            Ok(out) => {
                debug!("Remove command failed: {}", out.diagnostic());
                false
            }
            Err(e) => {
                debug!("Remove command could not start: {:#}", e);
                false
            }
        };
        if succeeded {
            ui::success("Removed old lint dependencies");
        } else {
            ui::warn_user("Some dependencies could not be removed; this is expected if they were not installed");
        }
        succeeded
    }

    /// # Install Dependencies (`install`)
    ///
    /// Installs `deps` with a single command. Attempted exactly once.
    ///
    /// # Errors
    ///
    /// `LintstartError::InstallFailed` when the command exits non-zero or cannot
    /// be started. The error carries the command's stderr (or stdout).
    pub async fn install(&self, deps: &DependencySet, dev: bool) -> Result<()> {
        if deps.is_empty() {
            return Ok(());
        }
        println!("📦 Installing dependencies: {}", deps.specifiers().join(", "));
        let command = self.kind.install_command(deps, dev);
        let output = match self.run(&command).await {
            Ok(out) => out,
            Err(e) => CommandOutput::failed(&format!("{:#}", e)),
        };
        if !output.success {
            return Err(LintstartError::InstallFailed {
                manager: self.kind.to_string(),
                output: output.diagnostic(),
            }
            .into());
        }
        info!("Installed {} dependencies with {}", deps.len(), self.kind);
        ui::success("Dependencies installed");
        Ok(())
    }

    /// Runs a manifest script.
    ///
    /// # Errors
    ///
    /// `LintstartError::ExternalCommand` when the script exits non-zero, or the
    /// spawn error when the shell cannot be started.
    pub async fn run_script(&self, script: &str) -> Result<()> {
        let command = self.kind.run_script_command(script);
        let output = self.run(&command).await?;
        if !output.success {
            return Err(LintstartError::ExternalCommand {
                cmd: command,
                status: output.status.clone(),
                output: output.diagnostic(),
            }
            .into());
        }
        Ok(())
    }

    /// # Add Scripts (`add_scripts`)
    ///
    /// Sets `lint`, `lint:fix`, `format` and `format:check` in the manifest's
    /// `scripts` map, keeping every other script, and rewrites the manifest.
    /// A missing or malformed manifest is a warning and the step is skipped.
    ///
    /// Returns `Ok(true)` when the manifest was updated.
    ///
    /// # Errors
    ///
    /// Only when writing the updated manifest fails.
    pub fn add_scripts(&self) -> Result<bool> {
        let mut manifest = match manifest::read_manifest(&self.dir) {
            Ok(Some(manifest)) => manifest,
            Ok(None) => {
                ui::warn_user("No package.json found; skipping the lint/format scripts");
                return Ok(false);
            }
            Err(e) => {
                debug!("Manifest unreadable: {:#}", e);
                ui::warn_user("Could not update the package.json scripts (manifest is not valid JSON)");
                return Ok(false);
            }
        };

        let Some(root) = manifest.as_object_mut() else {
            return Ok(false);
        };
        let scripts = root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if !scripts.is_object() {
            ui::warn_user("Could not update the package.json scripts (\"scripts\" is not an object)");
            return Ok(false);
        }
        if let Some(scripts) = scripts.as_object_mut() {
            for (name, command) in lint_scripts() {
                scripts.insert(name.to_string(), Value::String(command));
            }
        }

        io::write_json_pretty(&manifest::manifest_path(&self.dir), &manifest)?;
        ui::success("Added lint and format scripts to package.json");
        Ok(true)
    }
}
