//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Name the value types and output formats a lookup can use.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load the overlay (see `main()`).

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envkit")]
#[command(about = "Inspect typed environment configuration and *.env overlays", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envkit get PORT --type int --default 8080\n  envkit get PEERS --type strings --delimiter ';'\n  envkit get LABELS --type map --delimiter , --pair-delimiter :\n  envkit --dir ./deploy list --values\n"
)]
pub struct Cli {
    /// Directory to scan for *.env files (defaults to the executable's directory)
    #[arg(long, global = true, env = "ENVKIT_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Ignore *.env files and read the process environment only (overrides --dir)
    #[arg(long, global = true)]
    pub no_overlay: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a variable and print its typed value
    Get {
        /// Variable name (case-sensitive)
        key: String,

        /// Type to convert the value to
        #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,

        /// Element delimiter for list and map types
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Key/value delimiter for the map type
        #[arg(long, default_value = ":")]
        pair_delimiter: String,

        /// Value to use when the variable is unset, written like the variable itself
        #[arg(long, allow_hyphen_values = true)]
        default: Option<String>,
    },

    /// List variables supplied by *.env files
    List {
        /// Include values (hidden by default since files may hold secrets)
        #[arg(long)]
        values: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    String,
    Bool,
    Int,
    Float,
    Duration,
    Strings,
    Ints,
    Durations,
    Map,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::String => "string",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Duration => "duration",
            ValueType::Strings => "strings",
            ValueType::Ints => "ints",
            ValueType::Durations => "durations",
            ValueType::Map => "map",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
