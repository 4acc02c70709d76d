//! # Lintstart Project Detector
//!
//! File: cli/src/commands/init/utils/project_detector.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module inspects a project directory (the manifest plus a few marker
//! files) to classify it by language (TypeScript / JavaScript) and UI
//! framework (React, Next.js, Vue, Vite). The result, a `ProjectProfile`, drives
//! the dependency set and the framework overlay used for config generation.
//!
//! ## Architecture
//!
//! The detection follows a priority-based approach:
//!
//! 1. Read `package.json` if present and collect the keys of `dependencies` and
//!    `devDependencies`. A malformed manifest is reported as a warning and the
//!    defaults are used instead.
//! 2. Framework: `next` / `@next/*`, then `vue` / `@vue/*`, then `vite`; the first
//!    match wins, React otherwise.
//! 3. Language: a `typescript` or `@types/node` dependency, or a `tsconfig.json`,
//!    means TypeScript. Failing that, the top level of `src`, `lib`, `app` and
//!    `pages` is scanned for `.ts` / `.tsx` files.
//! 4. Anything missing or unreadable degrades to the defaults (JavaScript, React).
//!
//! Detection only reads the filesystem and never fails.
//!
//! ## Usage
//!
//! ```rust
//! use crate::commands::init::utils::project_detector;
//!
//! let profile = project_detector::detect(&working_dir);
//! println!("Framework: {}", profile.framework);
//! println!("Language: {}", profile.language);
//! ```
//!
use super::manifest;
use crate::common::ui;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Conventional source directories probed for TypeScript files.
pub const SOURCE_DIRS: [&str; 4] = ["src", "lib", "app", "pages"];
/// TypeScript compiler configuration marker.
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Primary language of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI framework of the project. `None` means "no framework overlay".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    NextJs,
    Vue,
    Vite,
    None,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::NextJs => "nextjs",
            Framework::Vue => "vue",
            Framework::Vite => "vite",
            Framework::None => "none",
        }
    }

    /// Frameworks whose projects use the React lint plugins.
    pub fn uses_react(&self) -> bool {
        matches!(self, Framework::React | Framework::NextJs | Framework::Vite)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Project Profile (`ProjectProfile`)
///
/// The language and framework of the project being configured. Derived once per
/// run and not modified afterwards; the language confirmation step builds a new
/// profile rather than mutating this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectProfile {
    pub language: Language,
    pub framework: Framework,
}

/// The fallback profile: a JavaScript React project.
impl Default for ProjectProfile {
    fn default() -> Self {
        ProjectProfile {
            language: Language::JavaScript,
            framework: Framework::React,
        }
    }
}

/// # Detect Project Profile (`detect`)
///
/// Analyzes `project_dir` and returns its `ProjectProfile`. See the module
/// documentation for the detection order. Never fails; every missing or
/// unreadable input degrades to the defaults.
pub fn detect(project_dir: &Path) -> ProjectProfile {
    debug!("Detecting project profile in: {}", project_dir.display());

    let deps = match manifest::read_manifest(project_dir) {
        Ok(Some(manifest)) => manifest::dependency_names(&manifest),
        Ok(None) => {
            debug!("No package.json found, using defaults.");
            BTreeSet::new()
        }
        Err(e) => {
            ui::warn_user(&format!(
                "Could not read package.json ({:#}); using the default configuration",
                e
            ));
            BTreeSet::new()
        }
    };

    let framework = detect_framework(&deps);
    let language = if has_typescript_marker(project_dir, &deps) || has_typescript_sources(project_dir) {
        Language::TypeScript
    } else {
        Language::JavaScript
    };

    let profile = ProjectProfile {
        language,
        framework,
    };
    debug!("Detected profile: {:?}", profile);
    profile
}

/// Framework from dependency names, in priority order.
fn detect_framework(deps: &BTreeSet<String>) -> Framework {
    if deps.contains("next") || deps.iter().any(|d| d.starts_with("@next/")) {
        Framework::NextJs
    } else if deps.contains("vue") || deps.iter().any(|d| d.starts_with("@vue/")) {
        Framework::Vue
    } else if deps.contains("vite") {
        Framework::Vite
    } else {
        Framework::React
    }
}

/// Checks for TypeScript dependencies or a `tsconfig.json`.
fn has_typescript_marker(path: &Path, deps: &BTreeSet<String>) -> bool {
    deps.contains("typescript") || deps.contains("@types/node") || path.join(TSCONFIG_FILE).exists()
}

/// # Check Source Directories (Fallback)
///
/// Scans the immediate files (non-recursive) of each conventional source
/// directory for `.ts` / `.tsx` files. Unreadable entries are skipped.
fn has_typescript_sources(path: &Path) -> bool {
    SOURCE_DIRS
        .iter()
        .map(|dir| path.join(dir))
        .filter(|dir| dir.is_dir())
        .any(|dir| {
            WalkDir::new(&dir)
                .min_depth(1)
                .max_depth(1)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .any(|entry| {
                    let name = entry.file_name().to_string_lossy();
                    let found = name.ends_with(".ts") || name.ends_with(".tsx");
                    if found {
                        debug!("Found TypeScript source: {}", entry.path().display());
                    }
                    found
                })
        })
}
