use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Resolve symbol-graph kind identifiers.
///
/// symbol-kind maps legacy language-prefixed identifiers (`swift.func`) and
/// language-agnostic ones (`func`) onto the canonical kind vocabulary, and decodes
/// kind records from symbol-graph JSON.
#[derive(Parser, Debug)]
#[command(
    name = "symbol-kind",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    /// Path to a configuration file (defaults to ./symbol-kind.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, ValueEnum, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per result (default).
    #[default]
    Compact,
    /// Human-readable columnar table with optional ANSI color when stdout is a terminal.
    Table,
    /// Structured JSON array suitable for programmatic consumption.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every canonical kind identifier.
    Kinds {
        /// Output format (overrides the config file).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Resolve one or more identifiers (e.g. "swift.func", "func", "objc.class").
    ///
    /// Unrecognized identifiers resolve to `unknown` and keep their original text.
    Parse {
        /// Identifiers to resolve.
        #[arg(required = true)]
        identifiers: Vec<String>,

        /// Exit with an error if any identifier is unknown.
        #[arg(long)]
        strict: bool,

        /// Output format (overrides the config file).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Decode kind records from a JSON file.
    ///
    /// The file holds one record or an array of records. Each record is either a bare
    /// identifier string or an object with `identifier` and optional `displayName`.
    Decode {
        /// JSON file to decode, or "-" to read standard input.
        input: PathBuf,

        /// Exit with an error if any record has an unknown kind.
        #[arg(long)]
        strict: bool,

        /// Print each decoded record to stderr as it is resolved.
        #[arg(short, long)]
        verbose: bool,

        /// Output format (overrides the config file).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}
