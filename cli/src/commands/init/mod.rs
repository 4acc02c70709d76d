//! # Lintstart Init Command
//!
//! File: cli/src/commands/init/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The one thing lintstart does: set up ESLint, Prettier and editor settings
//! for a JavaScript/TypeScript project. This module owns the command-line
//! arguments and wires the pipeline together:
//!
//! 1. Resolve the project directory (`--dir`, default: current directory).
//! 2. Load the lintstart configuration (user file, then `.lintstart.toml`).
//! 3. Build the prompter once (`--yes` answers every prompt with its default).
//! 4. Pick the mode: `--enhanced` / `--legacy`, `--yes` alone means enhanced,
//!    otherwise the interactive version selector runs.
//! 5. Run the `Orchestrator` with a shell-backed `CommandRunner`.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive: choose the version, preset and language
//! lintstart
//!
//! # Enhanced pipeline, every prompt answered with its default
//! lintstart --enhanced --yes
//!
//! # Classic pipeline for another directory
//! lintstart --legacy -C ../my-app
//! ```
//!
use crate::common::process::{CommandRunner, ShellRunner};
use crate::common::ui::prompts::{DefaultPrompter, Prompter, TerminalPrompter};
use crate::core::config;
use crate::core::error::{LintstartError, Result};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub mod pipeline;
pub mod selector;
pub mod utils;
pub mod validate;

use pipeline::{Mode, Orchestrator};

/// Arguments of the setup run.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct InitArgs {
    /// Run the enhanced version (presets, framework rules, scripts)
    #[arg(short, long, conflicts_with = "legacy")]
    pub enhanced: bool,

    /// Run the legacy version (fixed standard preset)
    #[arg(short, long)]
    pub legacy: bool,

    /// Answer every prompt with its default (non-interactive)
    #[arg(short, long)]
    pub yes: bool,

    /// Project directory to configure (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

impl InitArgs {
    /// Mode fixed by flags alone, if any.
    pub fn preselected_mode(&self) -> Option<Mode> {
        if self.enhanced {
            Some(Mode::Enhanced)
        } else if self.legacy {
            Some(Mode::Legacy)
        } else if self.yes {
            Some(Mode::Enhanced)
        } else {
            None
        }
    }
}

/// # Handle Init (`handle_init`)
///
/// Runs one complete setup for the project directory named in `args`.
///
/// # Errors
///
/// Configuration errors, prompt failures and every fatal pipeline error.
pub async fn handle_init(args: InitArgs) -> Result<()> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine the current directory")?,
    };
    if !dir.is_dir() {
        return Err(LintstartError::Config(format!(
            "Project directory '{}' does not exist",
            dir.display()
        ))
        .into());
    }
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;

    let config = config::load_config(&dir)?;

    let prompter: Box<dyn Prompter> = if args.yes {
        Box::new(DefaultPrompter)
    } else {
        Box::new(TerminalPrompter::new())
    };

    let mode = match args.preselected_mode() {
        Some(mode) => mode,
        None => selector::select_mode(prompter.as_ref())?,
    };
    info!("Running the {} pipeline for {}", mode, dir.display());

    let runner: Arc<dyn CommandRunner> = Arc::new(ShellRunner);
    Orchestrator::new(mode, &dir, &config, prompter.as_ref(), runner)
        .run()
        .await?;
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        init: InitArgs,
    }

    fn parse(args: &[&str]) -> std::result::Result<InitArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("lintstart").chain(args.iter().copied())).map(|cli| cli.init)
    }

    #[test]
    fn test_mode_selection_from_flags() {
        assert_eq!(parse(&[]).unwrap().preselected_mode(), None);
        assert_eq!(parse(&["--enhanced"]).unwrap().preselected_mode(), Some(Mode::Enhanced));
        assert_eq!(parse(&["-l"]).unwrap().preselected_mode(), Some(Mode::Legacy));
        assert_eq!(parse(&["-y"]).unwrap().preselected_mode(), Some(Mode::Enhanced));
        assert_eq!(parse(&["-l", "-y"]).unwrap().preselected_mode(), Some(Mode::Legacy));
    }

    #[test]
    fn test_mode_flags_conflict() {
        assert!(parse(&["--enhanced", "--legacy"]).is_err());
    }

    #[test]
    fn test_dir_flag() {
        let args = parse(&["-C", "/tmp/project"]).unwrap();
        assert_eq!(args.dir, Some(PathBuf::from("/tmp/project")));
    }

    #[tokio::test]
    async fn test_missing_directory_is_a_config_error() {
        let args = InitArgs {
            dir: Some(PathBuf::from("/definitely/not/a/real/dir")),
            yes: true,
            ..Default::default()
        };
        let err = handle_init(args).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LintstartError>(),
            Some(LintstartError::Config(_))
        ));
    }
}
