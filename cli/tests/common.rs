//! # Lintstart CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Besides locating
//! the compiled `lintstart` binary, this sets up a sandbox: a project
//! directory, an isolated HOME / XDG config directory, and a `bin/` directory of
//! fake `node` / package-manager executables that log their arguments instead
//! of touching the network.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// # Get Lintstart Command (`lintstart_cmd`)
///
/// An `assert_cmd::Command` pointing at the compiled `lintstart` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn lintstart_cmd() -> Command {
    Command::cargo_bin("lintstart").expect("Failed to find lintstart binary for testing")
}

/// A throwaway project plus fake tooling.
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    /// Creates the sandbox with a fake `node` (v20.11.0) and a fake `npm`
    /// that succeeds for every command.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create sandbox");
        for dir in ["project", "home", "config", "bin"] {
            fs::create_dir_all(root.path().join(dir)).expect("create sandbox dir");
        }
        // Stops the upward `.lintstart.toml` search at the project.
        fs::create_dir_all(root.path().join("project/.git")).expect("create .git");
        let sandbox = Self { root };
        sandbox.fake_tool("node", "echo v20.11.0");
        sandbox.fake_package_manager("npm", None);
        sandbox
    }

    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.path().join("commands.log")
    }

    /// Every logged fake-tool invocation, one `tool args...` per line.
    pub fn commands(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn write_project_file(&self, name: &str, content: &str) {
        let path = self.project().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, content).expect("write project file");
    }

    pub fn read_project_file(&self, name: &str) -> String {
        fs::read_to_string(self.project().join(name)).expect("read project file")
    }

    /// Installs an executable shell script named `name` in the fake `bin/`.
    pub fn fake_tool(&self, name: &str, body: &str) {
        let path = self.root.path().join("bin").join(name);
        let script = format!(
            "#!/bin/sh\necho \"{} $*\" >> \"{}\"\n{}\n",
            name,
            self.log_path().display(),
            body
        );
        fs::write(&path, script).expect("write fake tool");
        make_executable(&path);
    }

    /// Fake package manager; `fail_subcommand` makes that subcommand exit 1.
    pub fn fake_package_manager(&self, name: &str, fail_subcommand: Option<&str>) {
        let body = match fail_subcommand {
            Some(sub) => format!(
                "if [ \"$1\" = \"{}\" ]; then echo \"{} ERR! simulated failure\" >&2; exit 1; fi\nexit 0",
                sub, name
            ),
            None => "exit 0".to_string(),
        };
        self.fake_tool(name, &body);
    }

    /// `lintstart` running inside the sandbox with `-C <project>`.
    pub fn cmd(&self) -> Command {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.root.path().join("bin")];
        paths.extend(std::env::split_paths(&path));
        let joined = std::env::join_paths(paths).expect("join PATH");

        let mut cmd = lintstart_cmd();
        cmd.env("PATH", joined)
            .env("HOME", self.root.path().join("home"))
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env_remove("RUST_LOG")
            .arg("-C")
            .arg(self.project());
        cmd
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
