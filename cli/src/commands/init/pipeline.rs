//! # Lintstart Setup Pipeline
//!
//! File: cli/src/commands/init/pipeline.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The orchestrator. One pipeline serves both the enhanced and the legacy
//! mode; the `Mode` chosen at startup switches the few steps that differ.
//!
//! ## Architecture / Workflow
//!
//! Stages run strictly in this order, each awaited before the next starts:
//!
//! 1. `DetectEnvironment`: Node.js major version, runtime capabilities, project
//!    profile, package manager.
//! 2. `SelectPreset`: preset prompt (legacy: always `standard`).
//! 3. `ConfirmLanguage`: language prompt defaulting to the detected one, then the
//!    optional TSLint question (enhanced, TypeScript only).
//! 4. `ConfigurePackageManager`: point the manager at the registry (warning on failure).
//! 5. `RemoveOldDeps`: best-effort removal (warning on failure).
//! 6. `InstallNewDeps`: install; a failure aborts before any file is generated.
//! 7. `GenerateConfigs`: resolve and write every config file.
//! 8. `AddScripts`: enhanced only; lint/format scripts in `package.json`.
//! 9. `ValidateConfigs`: structural check of every generated file.
//! 10. `FormatNow`: optional, asked after completion (warning on failure).
//! 11. `Done`: final report.
//!
//! Steps 4-9 are counted by the `ProgressReporter`.
//!
//! ## Error Handling
//!
//! Any error propagates out of `run` unchanged. Nothing is rolled back: files
//! written and dependencies removed before the failure stay as they are.
//!
use super::utils::dependencies::{DependencySet, OLD_DEPENDENCIES};
use super::utils::generator::{self, GenerateOptions};
use super::utils::package_manager::PackageManager;
use super::utils::presets::{self, DEFAULT_PRESET, PRESET_NAMES};
use super::utils::project_detector::{self, Framework, Language, ProjectProfile};
use super::validate;
use crate::common::process::CommandRunner;
use crate::common::system::{self, RuntimeCapabilities};
use crate::common::ui::{self, progress::ProgressReporter, prompts::Prompter};
use crate::core::config::Config;
use crate::core::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Which flavour of the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Presets, framework overlays, scripts, optional TSLint config.
    Enhanced,
    /// Fixed `standard` preset, no framework overlay, no scripts, no TSLint.
    Legacy,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Enhanced => f.write_str("enhanced"),
            Mode::Legacy => f.write_str("legacy"),
        }
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DetectEnvironment,
    SelectPreset,
    ConfirmLanguage,
    ConfigurePackageManager,
    RemoveOldDeps,
    InstallNewDeps,
    GenerateConfigs,
    AddScripts,
    ValidateConfigs,
    FormatNow,
    Done,
}

impl Stage {
    /// Progress line shown when the stage starts.
    pub fn message(&self) -> &'static str {
        match self {
            Stage::DetectEnvironment => "Analyzing the project...",
            Stage::SelectPreset => "Selecting a preset...",
            Stage::ConfirmLanguage => "Confirming the project language...",
            Stage::ConfigurePackageManager => "Configuring the package manager and registry...",
            Stage::RemoveOldDeps => "Removing old lint dependencies...",
            Stage::InstallNewDeps => "Installing lint and format dependencies...",
            Stage::GenerateConfigs => "Generating configuration files...",
            Stage::AddScripts => "Adding package.json scripts...",
            Stage::ValidateConfigs => "Validating configuration files...",
            Stage::FormatNow => "Formatting the code...",
            Stage::Done => "Done",
        }
    }
}

/// What a completed run did, for the final report and for tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub mode: Mode,
    pub profile: ProjectProfile,
    pub preset: &'static str,
    pub include_tslint: bool,
    pub runtime: RuntimeCapabilities,
    pub package_manager: String,
    pub generated: Vec<PathBuf>,
    pub scripts_added: bool,
    pub formatted: bool,
}

/// # Orchestrator (`Orchestrator`)
///
/// Drives one run of the pipeline against a project directory. The prompter
/// and command runner are injected so the whole pipeline runs in tests without
/// a terminal or a package manager.
pub struct Orchestrator<'a> {
    mode: Mode,
    dir: PathBuf,
    config: &'a Config,
    prompter: &'a dyn Prompter,
    runner: Arc<dyn CommandRunner>,
    show_progress_bar: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        mode: Mode,
        dir: &Path,
        config: &'a Config,
        prompter: &'a dyn Prompter,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            mode,
            dir: dir.to_path_buf(),
            config,
            prompter,
            runner,
            show_progress_bar: true,
        }
    }

    /// Disables the `indicatif` bar; the `[n/N]` lines are still printed.
    pub fn without_progress_bar(mut self) -> Self {
        self.show_progress_bar = false;
        self
    }

    /// # Run Pipeline (`run`)
    ///
    /// Executes every stage in order and prints the final report.
    ///
    /// # Errors
    ///
    /// Install failures, write failures, validation failures and prompt
    /// failures abort the run and are returned as-is.
    pub async fn run(&self) -> Result<RunSummary> {
        info!("Starting {} pipeline in {}", self.mode, self.dir.display());
        println!("🚀 Welcome to lintstart ({} mode)", self.mode);
        println!("📋 Analyzing your project...\n");

        // --- DetectEnvironment ---
        debug!("{}", Stage::DetectEnvironment.message());
        let node_major = system::detect_node_major(self.runner.as_ref(), &self.dir).await;
        let runtime = RuntimeCapabilities::new(node_major, self.config.runtime.min_node_version);
        if !runtime.modern {
            ui::warn_user(&format!(
                "Node.js {}+ is recommended (found {}); dependencies will be pinned to compatible versions",
                self.config.runtime.min_node_version, node_major
            ));
        }
        let detected = project_detector::detect(&self.dir);
        println!("🔍 Detected:");
        println!("   Framework: {}", detected.framework);
        println!("   Language: {}", detected.language);
        let package_manager = PackageManager::detect(&self.dir, self.runner.clone());

        // --- SelectPreset ---
        debug!("{}", Stage::SelectPreset.message());
        let preset = self.select_preset()?;

        // --- ConfirmLanguage ---
        debug!("{}", Stage::ConfirmLanguage.message());
        let profile = ProjectProfile {
            language: self.confirm_language(detected.language)?,
            framework: detected.framework,
        };
        let include_tslint = self.mode == Mode::Enhanced
            && profile.language == Language::TypeScript
            && self.prompter.confirm(
                "Also generate a TSLint config? (TSLint is deprecated; ESLint is recommended)",
                false,
            )?;

        let stages = counted_stages(self.mode);
        let mut progress = if self.show_progress_bar {
            ProgressReporter::new(stages.len())
        } else {
            ProgressReporter::hidden(stages.len())
        };

        let plan = RunPlan {
            profile,
            preset,
            include_tslint,
            runtime,
        };
        let mut generated = Vec::new();
        let mut scripts_added = false;
        for stage in stages {
            progress.next_step(stage.message());
            match self.run_stage(stage, &package_manager, &plan, &generated).await {
                Ok(StageOutput::Generated(files)) => generated = files,
                Ok(StageOutput::ScriptsAdded(added)) => scripts_added = added,
                Ok(StageOutput::Nothing) => {}
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            }
        }
        progress.complete();

        // --- FormatNow ---
        let formatted = if self.prompter.confirm("Run the code formatter now?", false)? {
            println!("\n🎨 {}", Stage::FormatNow.message());
            match package_manager.run_script("format").await {
                Ok(()) => {
                    ui::success("Code formatted");
                    true
                }
                Err(e) => {
                    debug!("Format run failed: {:#}", e);
                    ui::warn_user("Formatting failed; run the format script manually");
                    false
                }
            }
        } else {
            false
        };

        // --- Done ---
        debug!("{}", Stage::Done.message());
        let summary = RunSummary {
            mode: self.mode,
            profile,
            preset,
            include_tslint,
            runtime,
            package_manager: package_manager.kind().to_string(),
            generated,
            scripts_added,
            formatted,
        };
        print_report(&summary);
        info!("{} pipeline finished", self.mode);
        Ok(summary)
    }

    fn select_preset(&self) -> Result<&'static str> {
        if self.mode == Mode::Legacy {
            debug!("Legacy mode uses the '{}' preset", DEFAULT_PRESET);
            return Ok(DEFAULT_PRESET);
        }
        let items: Vec<String> = PRESET_NAMES
            .iter()
            .map(|name| format!("{} - {}", name, presets::description(name)))
            .collect();
        let default = PRESET_NAMES
            .iter()
            .position(|name| *name == self.config.defaults.preset)
            .unwrap_or(0);
        let index = self.prompter.select("Choose a configuration preset", &items, default)?;
        Ok(PRESET_NAMES.get(index).copied().unwrap_or(DEFAULT_PRESET))
    }

    fn confirm_language(&self, detected: Language) -> Result<Language> {
        let choices = [Language::TypeScript, Language::JavaScript];
        let items = vec![
            "typescript - TypeScript project".to_string(),
            "javascript - JavaScript project".to_string(),
        ];
        let default = choices.iter().position(|l| *l == detected).unwrap_or(1);
        let index = self.prompter.select("Confirm the project language", &items, default)?;
        Ok(choices.get(index).copied().unwrap_or(detected))
    }

    async fn run_stage(
        &self,
        stage: Stage,
        package_manager: &PackageManager,
        plan: &RunPlan,
        generated: &[PathBuf],
    ) -> Result<StageOutput> {
        match stage {
            Stage::ConfigurePackageManager => {
                println!("📦 Package manager: {}", package_manager.kind());
                if self.config.registry.set {
                    package_manager.set_registry(&self.config.registry.url).await;
                } else {
                    debug!("Registry configuration disabled.");
                }
                Ok(StageOutput::Nothing)
            }
            Stage::RemoveOldDeps => {
                package_manager.remove(&OLD_DEPENDENCIES).await;
                Ok(StageOutput::Nothing)
            }
            Stage::InstallNewDeps => {
                let deps = DependencySet::for_profile(
                    &plan.profile,
                    self.overlay(plan.profile.framework),
                    plan.include_tslint,
                    !plan.runtime.modern,
                );
                package_manager.install(&deps, true).await?;
                Ok(StageOutput::Nothing)
            }
            Stage::GenerateConfigs => {
                let framework = self.overlay(plan.profile.framework);
                let options = GenerateOptions {
                    include_tslint: plan.include_tslint,
                    tslint_template: self.config.templates.tslint.as_ref().map(PathBuf::from),
                };
                let (_, written) = generator::generate(&plan.profile, plan.preset, framework, &self.dir, &options)?;
                Ok(StageOutput::Generated(written))
            }
            Stage::AddScripts => Ok(StageOutput::ScriptsAdded(package_manager.add_scripts()?)),
            Stage::ValidateConfigs => {
                validate::validate_configs(&self.dir, generated)?;
                Ok(StageOutput::Nothing)
            }
            // Run by `run` itself, outside the counted steps.
            Stage::DetectEnvironment
            | Stage::SelectPreset
            | Stage::ConfirmLanguage
            | Stage::FormatNow
            | Stage::Done => Ok(StageOutput::Nothing),
        }
    }

    /// Framework whose overlay (and config packages) the run applies.
    fn overlay(&self, detected: Framework) -> Framework {
        match self.mode {
            Mode::Enhanced => detected,
            Mode::Legacy => Framework::None,
        }
    }
}

/// The steps counted by the progress reporter, in order.
fn counted_stages(mode: Mode) -> Vec<Stage> {
    let mut stages = vec![
        Stage::ConfigurePackageManager,
        Stage::RemoveOldDeps,
        Stage::InstallNewDeps,
        Stage::GenerateConfigs,
    ];
    if mode == Mode::Enhanced {
        stages.push(Stage::AddScripts);
    }
    stages.push(Stage::ValidateConfigs);
    stages
}

/// Decisions fixed before the counted steps start.
struct RunPlan {
    profile: ProjectProfile,
    preset: &'static str,
    include_tslint: bool,
    runtime: RuntimeCapabilities,
}

enum StageOutput {
    Nothing,
    Generated(Vec<PathBuf>),
    ScriptsAdded(bool),
}

/// Path shown to the user: relative to the current directory when possible.
fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, cwd))
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

fn print_report(summary: &RunSummary) {
    println!("\n📄 Generated files:");
    for path in &summary.generated {
        println!("   • {}", display_path(path));
    }
    let pm = &summary.package_manager;
    println!("\n🎯 Setup finished! You can now:");
    if summary.scripts_added {
        println!("   • Run '{} run lint' to check the code", pm);
        println!("   • Run '{} run lint:fix' to fix problems automatically", pm);
        println!("   • Run '{} run format' to format the code", pm);
    } else {
        println!("   • Run 'npx eslint .' to check the code");
        println!("   • Run 'npx prettier --write .' to format the code");
    }
    println!("   • Enjoy format-on-save and inline lint errors in VSCode");
    println!("\n💡 Tip: restart your editor to pick up the new VSCode settings");
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::process::CommandOutput;
    use crate::common::ui::prompts::scripted::ScriptedPrompter;
    use crate::core::error::LintstartError;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Answers `node --version` with a fixed version and every other command
    /// with success, except commands starting with one of `fail_on`.
    struct FakeRunner {
        node_version: &'static str,
        fail_on: &'static [&'static str],
        commands: Mutex<Vec<String>>,
    }

    impl FakeRunner {
        fn new(node_version: &'static str, fail_on: &'static [&'static str]) -> Arc<Self> {
            Arc::new(Self {
                node_version,
                fail_on,
                commands: Mutex::new(Vec::new()),
            })
        }

        fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, command: &str, _cwd: &Path) -> Result<CommandOutput> {
            self.commands.lock().unwrap().push(command.to_string());
            if command == "node --version" {
                return Ok(CommandOutput {
                    stdout: format!("{}\n", self.node_version),
                    ..CommandOutput::ok()
                });
            }
            if self.fail_on.iter().any(|prefix| command.starts_with(prefix)) {
                Ok(CommandOutput::failed("simulated failure"))
            } else {
                Ok(CommandOutput::ok())
            }
        }
    }

    fn ts_react_project() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "app", "dependencies": {"react": "^18.0.0"}, "devDependencies": {"typescript": "^5.0.0"}}"#,
        )
        .unwrap();
        dir
    }

    #[tokio::test]
    async fn test_enhanced_run_end_to_end() -> Result<()> {
        let dir = ts_react_project();
        let config = Config::default();
        let prompter = ScriptedPrompter::default();
        let runner = FakeRunner::new("v20.11.0", &[]);

        let summary = Orchestrator::new(Mode::Enhanced, dir.path(), &config, &prompter, runner.clone())
            .without_progress_bar()
            .run()
            .await?;

        assert_eq!(summary.preset, "standard");
        assert_eq!(
            summary.profile,
            ProjectProfile {
                language: Language::TypeScript,
                framework: Framework::React
            }
        );
        assert!(summary.runtime.modern);
        assert!(summary.scripts_added);
        assert!(!summary.formatted);
        assert_eq!(summary.generated.len(), 5);

        let commands = runner.commands();
        assert_eq!(commands[0], "node --version");
        assert_eq!(commands[1], "npm config set registry https://registry.npmjs.org/");
        assert!(commands[2].starts_with("npm remove eslint prettier"));
        assert!(commands[3].starts_with("npm install eslint prettier"));
        assert!(commands[3].contains("@typescript-eslint/parser"));
        assert!(commands[3].ends_with("--save-dev"));
        assert_eq!(commands.len(), 4);

        let eslintrc = fs::read_to_string(dir.path().join(".eslintrc.js"))?;
        assert!(eslintrc.contains("\"parser\": \"@typescript-eslint/parser\""));
        assert!(eslintrc.contains("plugin:react-hooks/recommended"));

        let manifest: Value = serde_json::from_str(&fs::read_to_string(dir.path().join("package.json"))?)?;
        assert_eq!(manifest["scripts"]["lint"], "eslint . --ext .js,.jsx,.ts,.tsx");
        Ok(())
    }

    #[tokio::test]
    async fn test_install_failure_aborts_before_generation() -> Result<()> {
        let dir = ts_react_project();
        let config = Config::default();
        let prompter = ScriptedPrompter::default();
        let runner = FakeRunner::new("v20.11.0", &["npm install"]);

        let err = Orchestrator::new(Mode::Enhanced, dir.path(), &config, &prompter, runner)
            .without_progress_bar()
            .run()
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LintstartError>(),
            Some(LintstartError::InstallFailed { .. })
        ));
        assert!(!dir.path().join(".eslintrc.js").exists());
        assert!(!dir.path().join(".prettierrc.js").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_warning_steps_do_not_abort() -> Result<()> {
        let dir = ts_react_project();
        let config = Config::default();
        // Format requested, but the format script fails like registry and remove.
        let prompter = ScriptedPrompter::new(&[], &[false, true]);
        let runner = FakeRunner::new("v20.11.0", &["npm config", "npm remove", "npm run"]);

        let summary = Orchestrator::new(Mode::Enhanced, dir.path(), &config, &prompter, runner.clone())
            .without_progress_bar()
            .run()
            .await?;
        assert!(!summary.formatted);
        assert_eq!(runner.commands().last().map(String::as_str), Some("npm run format"));
        assert!(dir.path().join(".eslintrc.js").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_prompt_answers_drive_the_run() -> Result<()> {
        let dir = ts_react_project();
        fs::write(dir.path().join("yarn.lock"), "")?;
        let config = Config::default();
        // preset "relaxed", language typescript, TSLint yes, format yes.
        let prompter = ScriptedPrompter::new(&[2, 0], &[true, true]);
        let runner = FakeRunner::new("v20.11.0", &[]);

        let summary = Orchestrator::new(Mode::Enhanced, dir.path(), &config, &prompter, runner.clone())
            .without_progress_bar()
            .run()
            .await?;

        assert_eq!(summary.preset, "relaxed");
        assert!(summary.include_tslint);
        assert!(summary.formatted);
        assert_eq!(summary.package_manager, "yarn");
        assert!(dir.path().join("tslint.json").exists());
        let commands = runner.commands();
        assert!(commands.iter().any(|c| c.starts_with("yarn add ") && c.contains("tslint-react") && c.ends_with("--dev")));
        assert_eq!(commands.last().map(String::as_str), Some("yarn run format"));
        let prettierrc = fs::read_to_string(dir.path().join(".prettierrc.js"))?;
        assert!(prettierrc.contains("\"printWidth\": 120"));
        Ok(())
    }

    #[tokio::test]
    async fn test_legacy_mode() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"next": "14", "react": "18"}}"#,
        )?;
        let config = Config::default();
        // A preset selection is never asked in legacy mode; only the language is.
        let prompter = ScriptedPrompter::new(&[1], &[]);
        let runner = FakeRunner::new("v20.11.0", &[]);

        let summary = Orchestrator::new(Mode::Legacy, dir.path(), &config, &prompter, runner.clone())
            .without_progress_bar()
            .run()
            .await?;

        assert_eq!(summary.preset, "standard");
        let commands = runner.commands();
        let install = commands
            .iter()
            .find(|c| c.starts_with("npm install"))
            .expect("install command");
        assert!(!install.contains("eslint-config-next"));
        assert!(install.contains("eslint-plugin-react-hooks"));
        assert!(!summary.scripts_added);
        assert_eq!(
            prompter.prompts(),
            vec!["Confirm the project language", "Run the code formatter now?"]
        );
        let eslintrc = fs::read_to_string(dir.path().join(".eslintrc.js"))?;
        assert!(!eslintrc.contains("next/core-web-vitals"));
        let manifest = fs::read_to_string(dir.path().join("package.json"))?;
        assert!(!manifest.contains("scripts"));
        Ok(())
    }

    #[tokio::test]
    async fn test_write_failure_aborts_and_keeps_earlier_files() -> Result<()> {
        let dir = ts_react_project();
        // The editor settings directory cannot be created over a regular file.
        fs::write(dir.path().join(".vscode"), "not a directory")?;
        let config = Config::default();
        let prompter = ScriptedPrompter::default();
        let runner = FakeRunner::new("v20.11.0", &[]);

        let result = Orchestrator::new(Mode::Enhanced, dir.path(), &config, &prompter, runner.clone())
            .without_progress_bar()
            .run()
            .await;

        assert!(result.is_err());
        assert!(dir.path().join(".eslintrc.js").is_file());
        assert!(dir.path().join(".prettierrc.js").is_file());
        assert!(dir.path().join(".vscode").is_file());
        // Neither AddScripts nor the format prompt was reached.
        let manifest = fs::read_to_string(dir.path().join("package.json"))?;
        assert!(!manifest.contains("scripts"));
        assert!(!prompter.prompts().contains(&"Run the code formatter now?".to_string()));
        assert!(!runner.commands().iter().any(|c| c.contains("run format")));
        Ok(())
    }

    #[tokio::test]
    async fn test_validation_failure_aborts_run() -> Result<()> {
        let dir = ts_react_project();
        let template = dir.path().join("broken-tslint.json");
        fs::write(&template, "[\"not an object\"]")?;
        let mut config = Config::default();
        config.templates.tslint = Some(template.display().to_string());
        // Default preset and language, TSLint yes.
        let prompter = ScriptedPrompter::new(&[], &[true]);
        let runner = FakeRunner::new("v20.11.0", &[]);

        let err = Orchestrator::new(Mode::Enhanced, dir.path(), &config, &prompter, runner)
            .without_progress_bar()
            .run()
            .await
            .unwrap_err();

        match err.downcast_ref::<LintstartError>() {
            Some(LintstartError::Validation { file, reason }) => {
                assert!(file.ends_with("tslint.json"));
                assert_eq!(reason, "expected a JSON object");
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
        assert!(!prompter.prompts().contains(&"Run the code formatter now?".to_string()));
        Ok(())
    }

    #[test]
    fn test_counted_stages() {
        assert_eq!(
            counted_stages(Mode::Enhanced),
            vec![
                Stage::ConfigurePackageManager,
                Stage::RemoveOldDeps,
                Stage::InstallNewDeps,
                Stage::GenerateConfigs,
                Stage::AddScripts,
                Stage::ValidateConfigs,
            ]
        );
        let legacy = counted_stages(Mode::Legacy);
        assert_eq!(legacy.len(), 5);
        assert!(!legacy.contains(&Stage::AddScripts));
    }

    #[tokio::test]
    async fn test_old_runtime_pins_dependencies() -> Result<()> {
        let dir = tempdir()?;
        let mut config = Config::default();
        config.registry.set = false;
        let prompter = ScriptedPrompter::default();
        let runner = FakeRunner::new("v12.22.0", &[]);

        let summary = Orchestrator::new(Mode::Enhanced, dir.path(), &config, &prompter, runner.clone())
            .without_progress_bar()
            .run()
            .await?;

        assert!(!summary.runtime.modern);
        assert_eq!(summary.runtime.node_major, 12);
        let commands = runner.commands();
        assert!(!commands.iter().any(|c| c.contains("config set registry")));
        let install = commands
            .iter()
            .find(|c| c.starts_with("npm install"))
            .expect("install command");
        assert!(install.contains("\"eslint@^8.57.0\""));
        assert!(install.contains("\"prettier@^2.8.8\""));
        Ok(())
    }
}
