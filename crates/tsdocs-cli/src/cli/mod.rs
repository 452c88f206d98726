//! Command-line interface definition.
//!
//! - `tsdocs generate` - render entry files of an extract as markdown
//! - `tsdocs plugins` - list the plugin modules that can be loaded by name

mod commands;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{Command, GenerateArgs};

/// tsdocs - markdown documentation for TypeScript APIs
#[derive(Parser, Debug)]
#[command(
    name = "tsdocs",
    version,
    about = "Markdown documentation for TypeScript APIs",
    long_about = "tsdocs renders the API registry produced by a TypeScript API extractor\n\
                  as markdown: one file per entry file, with headings, signatures,\n\
                  parameter tables and a table of contents."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (default: ./tsdocs.config.json when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}
