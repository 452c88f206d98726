//! Error types for the tsdocs CLI.
//!
//! [`CliError`] is what commands return. Configuration problems are kept in
//! their own [`ConfigError`] so their messages can carry a hint. `main`
//! turns every error into a [`miette::Report`] with [`cli_error_to_miette`].

use std::path::PathBuf;
use thiserror::Error;
use tsdocs::{DocsError, PluginLoadError};

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failures while reading the extract or rendering it.
    #[error(transparent)]
    Docs(#[from] DocsError),

    #[error("Failed to write {}: {error}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

/// Configuration errors. Each message ends with a hint.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}\n\nHint: Create a tsdocs.config.json file or pass --config <path>", .0.display())]
    NotFound(PathBuf),

    #[error("Extract file not found: {}\n\nHint: Run the API extractor first or set 'extract' in tsdocs.config.json", .0.display())]
    ExtractNotFound(PathBuf),

    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField { field: String, hint: String },

    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Converts a CLI error into a report, keeping hints on their own lines.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(e) => miette::miette!("{}", e),
        CliError::Docs(DocsError::PluginLoad(e)) => plugin_error_to_miette(e),
        CliError::Docs(DocsError::EntryFileNotFound(entry)) => miette::miette!(
            "Entry file \"{}\" was not found in the extract\n\nHint: Entry files are matched against the source files recorded by the extractor",
            entry
        ),
        _ => miette::miette!("{}", err),
    }
}

fn plugin_error_to_miette(err: PluginLoadError) -> miette::Report {
    match err {
        PluginLoadError::ModuleNotFound(ref name) => miette::miette!(
            "{}\n\nHint: Run 'tsdocs plugins' to list the available plugin modules",
            err
        )
        .wrap_err(format!("Failed to load plugin \"{name}\"")),
        _ => miette::miette!("{}", err).wrap_err("Failed to load plugins"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("tsdocs.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("tsdocs.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_missing_field() {
        let err = ConfigError::MissingField {
            field: "entryFile".to_string(),
            hint: "Provide at least one entry file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Missing required field: entryFile"));
        assert!(msg.contains("Hint: Provide at least one entry file"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::ExtractNotFound(PathBuf::from("a.json")).into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_docs_error_is_transparent() {
        let cli_err: CliError = DocsError::EntryFileNotFound("src/a.ts".to_string()).into();
        assert_eq!(
            cli_err.to_string(),
            DocsError::EntryFileNotFound("src/a.ts".to_string()).to_string()
        );
    }

    #[test]
    fn test_missing_module_report_has_hint() {
        let err: CliError =
            DocsError::PluginLoad(PluginLoadError::ModuleNotFound("nope".to_string())).into();
        let report = cli_error_to_miette(err);
        assert_eq!(report.to_string(), "Failed to load plugin \"nope\"");
        assert!(report
            .chain()
            .any(|cause| cause.to_string().contains("tsdocs plugins")));
    }
}
