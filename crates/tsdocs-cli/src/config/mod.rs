//! Configuration for `tsdocs generate`.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment (`TSDOCS_*`) > File (`tsdocs.config.json`) > Defaults

mod conversions;
mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::{ConfigOverrides, CONFIG_FILE_NAME, ENV_PREFIX};

/// tsdocs configuration, loaded from tsdocs.config.json or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocsConfig {
    /// Directory that `extract` and `output` are relative to
    #[serde(default = "default_project")]
    pub project: PathBuf,

    /// Extracted API registry
    #[serde(default = "default_extract")]
    pub extract: PathBuf,

    /// Output directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Entry files to document (e.g., ["src/index.ts"])
    #[serde(default)]
    pub entry_file: Vec<String>,

    /// Plugin module names or manifest paths
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugin: Vec<String>,

    /// Path prefixes whose items are left out
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(default = "default_exclude_private_api")]
    pub exclude_private_api: bool,

    /// Render without writing files
    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub skip_table_of_contents: bool,
}

impl DocsConfig {
    /// Extract path resolved against the project directory.
    pub fn extract_path(&self) -> PathBuf {
        self.project.join(&self.extract)
    }

    /// Output directory resolved against the project directory.
    pub fn output_dir(&self) -> PathBuf {
        self.project.join(&self.output)
    }
}
