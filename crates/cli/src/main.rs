//! envkit - inspect typed environment configuration from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install the `*.env` overlay selected by `--dir` / `--no-overlay` before any lookup.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Parsing or precedence rules (see the `envkit-config` crate).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - A malformed variable terminates through `envkit_config::exit_malformed` (exit 78).

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use envkit_config::{EnvOverlay, exit_malformed, overlay};
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install an explicitly selected overlay; otherwise the global scan runs lazily.
fn install_overlay(cli: &Cli) {
    let selected = if cli.no_overlay {
        Some(EnvOverlay::empty())
    } else {
        cli.dir.as_deref().map(EnvOverlay::from_dir)
    };

    if let Some(loaded) = selected {
        tracing::debug!(entries = loaded.len(), "installing explicit overlay");
        if overlay::install(loaded).is_err() {
            tracing::debug!("overlay already initialized; keeping existing one");
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    install_overlay(&cli);

    if let Err(e) = run_command(cli) {
        if let Some(env_error) = e.env_error() {
            exit_malformed(env_error);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}
