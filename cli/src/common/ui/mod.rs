//! # Lintstart UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! Terminal interaction for the pipeline.
//!
//! - **`progress`**: the `[n/N]` step counter and `indicatif` bar.
//! - **`prompts`**: the `Prompter` trait with a `dialoguer` implementation and a
//!   defaults-only implementation for `--yes`.
//! - **`warn_user` / `success`**: user-facing status lines. Warnings carry a
//!   distinct `⚠️` prefix so they are never confused with fatal errors (`❌`).
//!
pub mod progress;
pub mod prompts;

/// Prints a non-fatal warning for the user and mirrors it into the log.
pub fn warn_user(message: &str) {
    tracing::info!("warning shown to user: {}", message);
    println!("⚠️  {}", message);
}

/// Prints a success line.
pub fn success(message: &str) {
    println!("✅ {}", message);
}
