//! # Lintstart Prompt Providers
//!
//! File: cli/src/common/ui/prompts.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every question the pipeline asks goes through the `Prompter` trait. A
//! prompter is built once in `main` and handed to the orchestrator, so nothing
//! holds a global prompt handle.
//!
//! - **`TerminalPrompter`**: interactive prompts rendered by `dialoguer`.
//! - **`DefaultPrompter`**: answers every question with its default (`--yes`).
//!
use crate::core::error::{LintstartError, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::debug;

/// Source of answers for the interactive steps.
pub trait Prompter {
    /// Asks the user to pick one of `items`; returns the chosen index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;
    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
    /// Waits for the user to press Enter.
    fn pause(&self, prompt: &str) -> Result<()>;
}

/// Interactive terminal prompts.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

fn prompt_error(e: dialoguer::Error) -> anyhow::Error {
    anyhow::anyhow!(LintstartError::Prompt(e.to_string()))
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default.min(items.len().saturating_sub(1)))
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn pause(&self, prompt: &str) -> Result<()> {
        let _: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        Ok(())
    }
}

/// Non-interactive prompter: every answer is the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPrompter;

impl Prompter for DefaultPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        if items.is_empty() {
            return Err(anyhow::anyhow!(LintstartError::Prompt(format!(
                "No choices offered for '{}'",
                prompt
            ))));
        }
        let index = default.min(items.len() - 1);
        debug!("--yes: '{}' -> '{}'", prompt, items[index]);
        Ok(index)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        debug!("--yes: '{}' -> {}", prompt, default);
        Ok(default)
    }

    fn pause(&self, _prompt: &str) -> Result<()> {
        Ok(())
    }
}
