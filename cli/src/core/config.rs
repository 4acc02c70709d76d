//! # Lintstart Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the tool configuration for lintstart, handling loading,
//! merging, validation, and access to configuration data. Everything here is
//! optional: with no files present the built-in defaults reproduce the standard
//! behaviour (public npm registry, "standard" preset, Node 16 as the modern
//! runtime threshold, bundled TSLint template).
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.lintstart.toml` in the working directory or its ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/lintstart/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config(&working_dir)?;
//!
//! if cfg.registry.set {
//!     package_manager.set_registry(&cfg.registry.url).await;
//! }
//! let threshold = cfg.runtime.min_node_version;
//! ```
//!
//! An example project file:
//!
//! ```toml
//! [registry]
//! url = "https://registry.npmjs.org/"
//! set = false
//!
//! [defaults]
//! preset = "team"
//!
//! [templates]
//! tslint = "~/templates/tslint.json"
//! ```
//!
use crate::commands::init::utils::presets;
use crate::core::error::{LintstartError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Registry handling for the `ConfigurePackageManager` step.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Registry URL the package manager is pointed at.
    #[serde(default = "default_registry_url")]
    pub url: String,
    /// Whether to run the registry command at all.
    #[serde(default = "default_true")]
    pub set: bool,
}

/// Defaults used by the interactive prompts.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Preset highlighted first in the preset prompt (and used with `--yes`).
    #[serde(default = "default_preset")]
    pub preset: String,
}

/// Runtime compatibility settings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Node.js major version considered "modern". Older runtimes get pinned dependencies.
    #[serde(default = "default_min_node_version")]
    pub min_node_version: u32,
}

/// Template overrides.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Path to a `tslint.json` copied instead of the bundled one (can use ~;
    /// relative paths start at the directory of the file that sets it).
    pub tslint: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            set: true,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            min_node_version: default_min_node_version(),
        }
    }
}

fn default_registry_url() -> String {
    "https://registry.npmjs.org/".to_string()
}
fn default_true() -> bool {
    true
}
fn default_preset() -> String {
    presets::DEFAULT_PRESET.to_string()
}
fn default_min_node_version() -> u32 {
    16
}

const PROJECT_CONFIG_FILENAME: &str = ".lintstart.toml";

/// Loads, merges, expands and validates the configuration for `working_dir`.
pub fn load_config(working_dir: &Path) -> Result<Config> {
    let user_config = match user_config_path() {
        Some(path) => load_optional(&path)?,
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    };
    let project_config = match find_project_config_path(working_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file (.lintstart.toml) found.");
            None
        }
    };
    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&mut merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Lintstart", "lintstart")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_optional(path: &Path) -> Result<Option<Config>> {
    if path.exists() {
        info!("Loading user configuration from: {}", path.display());
        load_config_from_path(path).map(Some)
    } else {
        debug!("User configuration file not found at {}", path.display());
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    expand_config_paths(&mut config, path);
    Ok(config)
}

/// Project values win whenever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    Config {
        registry: RegistryConfig {
            url: if project.registry.url != defaults.registry.url {
                project.registry.url
            } else {
                user.registry.url
            },
            set: project.registry.set && user.registry.set,
        },
        defaults: DefaultsConfig {
            preset: if project.defaults.preset != defaults.defaults.preset {
                project.defaults.preset
            } else {
                user.defaults.preset
            },
        },
        runtime: RuntimeConfig {
            min_node_version: if project.runtime.min_node_version
                != defaults.runtime.min_node_version
            {
                project.runtime.min_node_version
            } else {
                user.runtime.min_node_version
            },
        },
        templates: TemplatesConfig {
            tslint: project.templates.tslint.or(user.templates.tslint),
        },
    }
}

/// Expands `~` and anchors relative paths at the directory of `config_file`.
fn expand_config_paths(config: &mut Config, config_file: &Path) {
    if let Some(tslint) = config.templates.tslint.as_mut() {
        let expanded = PathBuf::from(shellexpand::tilde(tslint.as_str()).into_owned());
        let resolved = match config_file.parent() {
            Some(base) if expanded.is_relative() => base.join(expanded),
            _ => expanded,
        };
        *tslint = resolved.display().to_string();
        debug!("Expanded tslint template path: {}", tslint);
    }
}

fn validate_config(config: &mut Config) -> Result<()> {
    info!("Validating final configuration...");
    let url = &config.registry.url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(anyhow!(LintstartError::Config(format!(
            "Registry url '{}' must start with http:// or https://",
            url
        ))));
    }
    if config.runtime.min_node_version == 0 {
        return Err(anyhow!(LintstartError::Config(
            "runtime.min_node_version must be greater than zero".to_string()
        )));
    }
    if !presets::is_known(&config.defaults.preset) {
        warn!(
            "Unknown default preset '{}', using '{}'.",
            config.defaults.preset,
            presets::DEFAULT_PRESET
        );
        config.defaults.preset = presets::DEFAULT_PRESET.to_string();
    }
    if let Some(tslint) = &config.templates.tslint {
        if !Path::new(tslint).is_file() {
            warn!(
                "Configured TSLint template '{}' does not exist; the bundled template will be used.",
                tslint
            );
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [registry]
            url = "https://registry.npmmirror.com/"
            set = false

            [defaults]
            preset = "team"

            [templates]
            tslint = "~/templates/tslint.json"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.registry.url, "https://registry.npmmirror.com/");
        assert!(!config.registry.set);
        assert_eq!(config.defaults.preset, "team");
        assert_eq!(config.runtime.min_node_version, 16); // Default
        assert_eq!(
            config.templates.tslint.as_deref(),
            Some("~/templates/tslint.json")
        ); // Not yet expanded
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[registry]\nmirror = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            defaults: DefaultsConfig {
                preset: "strict".into(),
            },
            templates: TemplatesConfig {
                tslint: Some("/user/tslint.json".into()),
            },
            ..Default::default()
        };
        let project = Config {
            registry: RegistryConfig {
                url: "https://npm.example.com/".into(),
                set: true,
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.registry.url, "https://npm.example.com/");
        // Project left the preset at its default, so the user value survives.
        assert_eq!(merged.defaults.preset, "strict");
        assert_eq!(merged.templates.tslint.as_deref(), Some("/user/tslint.json"));
    }

    #[test]
    fn test_validate_rejects_bad_registry() {
        let mut config = Config {
            registry: RegistryConfig {
                url: "registry.npmjs.org".into(),
                set: true,
            },
            ..Default::default()
        };
        let result = validate_config(&mut config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must start with http"));
    }

    #[test]
    fn test_validate_unknown_preset_falls_back() {
        let mut config = Config {
            defaults: DefaultsConfig {
                preset: "paranoid".into(),
            },
            ..Default::default()
        };
        validate_config(&mut config).unwrap();
        assert_eq!(config.defaults.preset, "standard");
    }

    #[test]
    fn test_project_config_found_in_ancestor() {
        let root = tempdir().unwrap();
        fs::write(
            root.path().join(PROJECT_CONFIG_FILENAME),
            "[runtime]\nmin_node_version = 18\n",
        )
        .unwrap();
        let nested = root.path().join("packages/web");
        fs::create_dir_all(&nested).unwrap();

        let found = find_project_config_path(&nested).expect("config should be found");
        assert_eq!(found, root.path().join(PROJECT_CONFIG_FILENAME));
        let loaded = load_config_from_path(&found).unwrap();
        assert_eq!(loaded.runtime.min_node_version, 18);
    }

    #[test]
    fn test_relative_template_path_follows_config_file() {
        let root = tempdir().unwrap();
        fs::write(
            root.path().join(PROJECT_CONFIG_FILENAME),
            "[templates]\ntslint = \"templates/tslint.json\"\n",
        )
        .unwrap();
        let nested = root.path().join("packages/web");
        fs::create_dir_all(&nested).unwrap();

        let found = find_project_config_path(&nested).expect("config should be found");
        let loaded = load_config_from_path(&found).unwrap();
        assert_eq!(
            loaded.templates.tslint.map(PathBuf::from),
            Some(root.path().join("templates/tslint.json"))
        );
    }

    #[test]
    fn test_absolute_template_path_is_kept() {
        let root = tempdir().unwrap();
        let template = root.path().join("elsewhere/tslint.json");
        let config_file = root.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(
            &config_file,
            format!("[templates]\ntslint = {:?}\n", template.display().to_string()),
        )
        .unwrap();

        let loaded = load_config_from_path(&config_file).unwrap();
        assert_eq!(loaded.templates.tslint.map(PathBuf::from), Some(template));
    }

    #[test]
    fn test_project_config_search_stops_at_git() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert!(find_project_config_path(&repo).is_none());
    }
}
