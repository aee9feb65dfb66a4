//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Overlay loading (see `main()`).
//!
//! Invariants:
//! - The overlay is installed before dispatch, so `Environment::global()` never
//!   triggers a scan that ignores `--dir` or `--no-overlay`.

use anyhow::Result;
use envkit_config::Environment;

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let env = Environment::global();
    match cli.command {
        Commands::Get {
            key,
            value_type,
            delimiter,
            pair_delimiter,
            default,
        } => commands::get::run(
            env,
            &key,
            value_type,
            &delimiter,
            &pair_delimiter,
            default.as_deref(),
            cli.output,
        ),
        Commands::List { values } => commands::list::run(env.overlay(), values, cli.output),
    }
}
