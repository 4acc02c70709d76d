//! # Lintstart Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! This module executes the external commands lintstart needs: package-manager
//! registry/install/remove invocations, `node --version`, and the optional
//! format run. Each call is a single shell command, awaited to completion, with
//! no retry and no timeout.
//!
//! ## Architecture
//!
//! - **`CommandRunner`**: an object-safe async trait (`async-trait`). The pipeline
//!   only talks to this trait, so tests can substitute a recording runner.
//! - **`ShellRunner`**: the real implementation. Runs `sh -c <command>` (or
//!   `cmd /C <command>` on Windows) through `tokio::process::Command` in the given
//!   working directory, capturing stdout and stderr.
//! - **`CommandOutput`**: exit status plus captured output. A non-zero exit is
//!   *not* an `Err`; only a failure to spawn the shell is. Callers decide whether
//!   a failed command is fatal.
//!
//! ## Usage
//!
//! ```rust
//! let runner = ShellRunner;
//! let out = runner.run("npm config set registry https://registry.npmjs.org/", dir).await?;
//! if !out.success {
//!     warn!("registry not set: {}", out.diagnostic());
//! }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Result of running one shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Human-readable exit status (e.g. "exit status: 1").
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Convenience constructor for a successful run with empty output.
    pub fn ok() -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Convenience constructor for a failed run with the given stderr.
    pub fn failed(stderr: &str) -> Self {
        Self {
            success: false,
            status: "exit status: 1".to_string(),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// The most useful text to show a user when the command failed:
    /// stderr if present, otherwise stdout, otherwise the exit status.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        self.status.clone()
    }
}

/// Runs a shell command line in a working directory.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `command` in `cwd` and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when the command could not be started at all.
    async fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput>;
}

/// `CommandRunner` backed by the system shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput> {
        info!("Running command in {}: {}", cwd.display(), command);

        let mut cmd = shell_command(command);
        cmd.current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = cmd
            .output()
            .await
            .with_context(|| format!("Failed to start command '{}'", command))?;

        let result = CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            "Command '{}' finished with {} (stdout {} bytes, stderr {} bytes)",
            command,
            result.status,
            result.stdout.len(),
            result.stderr.len()
        );
        Ok(result)
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

/// Quotes a single argument for the shell if it contains anything beyond the
/// characters package names and plain flags use. `^` is quoted since `cmd.exe`
/// treats it as an escape.
pub fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '/' | '.' | '_' | '-' | ':' | '='));
    if plain {
        arg.to_string()
    } else {
        format!("\"{}\"", arg.replace('"', "\\\""))
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_quote_arg() {
        assert_eq!(quote_arg("eslint"), "eslint");
        assert_eq!(quote_arg("@typescript-eslint/parser"), "@typescript-eslint/parser");
        assert_eq!(quote_arg("--save-dev"), "--save-dev");
        assert_eq!(quote_arg("eslint@^8.57.0"), "\"eslint@^8.57.0\"");
        assert_eq!(quote_arg("a b"), "\"a b\"");
    }

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let out = CommandOutput {
            success: false,
            status: "exit status: 1".into(),
            stdout: "some progress".into(),
            stderr: "  npm ERR! 404  \n".into(),
        };
        assert_eq!(out.diagnostic(), "npm ERR! 404");

        let quiet = CommandOutput {
            stderr: String::new(),
            stdout: String::new(),
            ..out
        };
        assert_eq!(quiet.diagnostic(), "exit status: 1");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_shell_runner_captures_status_and_output() -> Result<()> {
        let dir = tempdir()?;
        let runner = ShellRunner;

        let ok = runner.run("echo hello", dir.path()).await?;
        assert!(ok.success);
        assert_eq!(ok.stdout.trim(), "hello");

        let failed = runner.run("echo broken >&2; exit 3", dir.path()).await?;
        assert!(!failed.success);
        assert_eq!(failed.diagnostic(), "broken");
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_shell_runner_uses_working_directory() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("marker.txt"), "x")?;
        let out = ShellRunner.run("ls", dir.path()).await?;
        assert!(out.stdout.contains("marker.txt"));
        Ok(())
    }
}
