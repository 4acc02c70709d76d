//! # Lintstart Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the lintstart CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the setup pipeline and reporting fatal errors
//!
//! ## Architecture
//!
//! lintstart has a single command, so the `init` arguments are flattened into
//! the top-level parser. All errors are propagated to this level, printed with
//! remediation suggestions, and turned into exit status 1.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! lintstart --help
//!
//! # Enhanced setup with defaults and debug logging
//! lintstart -vv --enhanced --yes
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Run the setup pipeline
//! 4. Format and display any error that occurs
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The setup pipeline
mod common; // Shared utilities (fs, process, system, ui)
mod core; // Core infrastructure (errors, config, templating)

const REMEDIATION_HINTS: [&str; 4] = [
    "Check your network connection",
    "Make sure you have write permission in the project directory",
    "Try removing node_modules (and clearing the package cache) before retrying",
    "Check that your Node.js version meets the requirements",
];

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "lintstart",
    about = "🧹 lintstart: ESLint + Prettier setup for JavaScript/TypeScript projects",
    long_about = "Detects the project's framework, language and package manager, installs\n\
                  the lint/format dependencies and generates ESLint, Prettier, ignore and\n\
                  VSCode configuration. Runs the interactive version selector when neither\n\
                  --enhanced nor --legacy is given.",
    version
)]
struct Cli {
    #[command(flatten)]
    init: commands::init::InitArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::init::handle_init(cli.init).await {
        tracing::error!("Setup failed: {:?}", e);
        eprintln!("\n❌ Setup failed: {:#}", e);
        println!("\n🔧 Suggestions:");
        for hint in REMEDIATION_HINTS {
            println!("   • {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}
