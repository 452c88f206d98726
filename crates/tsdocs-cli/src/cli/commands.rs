use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available tsdocs subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render entry files of an extract as markdown
    ///
    /// Reads the extracted API registry, renders every requested entry file
    /// through the built-in and requested plugins, and writes one markdown
    /// file per entry under the output directory.
    Generate(GenerateArgs),

    /// List plugin modules that can be loaded with --plugin
    Plugins,
}

/// Arguments for the generate command.
///
/// Every option left unset falls back to the config file, then to
/// `TSDOCS_*` environment variables, then to defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Entry files to document, as recorded by the extractor
    ///
    /// Examples:
    ///   tsdocs generate src/index.ts
    ///   tsdocs generate src/index.ts src/cli.ts
    #[arg(value_name = "ENTRY")]
    pub entry_file: Vec<String>,

    /// Project directory that relative paths are resolved against
    #[arg(short, long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Extracted API registry (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub extract: Option<PathBuf>,

    /// Output directory for markdown files
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Plugin module name or manifest path to load (repeatable)
    #[arg(long, value_name = "NAME_OR_PATH")]
    pub plugin: Vec<String>,

    /// Path prefix whose items are left out (repeatable)
    #[arg(long, value_name = "PATH")]
    pub exclude: Vec<String>,

    /// Document private members and items tagged @private
    #[arg(long)]
    pub include_private_api: bool,

    /// Render everything but write no files
    #[arg(long)]
    pub dry_run: bool,

    /// Leave out the table of contents
    #[arg(long)]
    pub skip_table_of_contents: bool,
}
