//! # Lintstart Init Utilities
//!
//! File: cli/src/commands/init/utils/mod.rs
//! Author: Christi Mahu
//!
//! Building blocks of the `init` pipeline, leaves first:
//!
//! - **`manifest`**: `package.json` access.
//! - **`project_detector`**: language/framework classification.
//! - **`presets`**: the preset catalog and framework overlays.
//! - **`dependencies`**: install/remove sets and the legacy compatibility matrix.
//! - **`package_manager`**: npm / yarn / pnpm detection and commands.
//! - **`generator`**: config resolution and file generation.
//!
pub mod dependencies;
pub mod generator;
pub mod manifest;
pub mod package_manager;
pub mod presets;
pub mod project_detector;
