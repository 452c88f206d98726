use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation generation.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for documentation generation.
///
/// Only conditions that make the whole run meaningless end up here. Missing
/// references and unsupported kinds are logged and rendered as placeholders.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to read the extracted registry.
    #[error("failed to read extracted data '{path}': {error}")]
    Io {
        /// Path to the file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The extracted registry is not valid JSON or does not match the model.
    #[error("failed to parse extracted data: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry file was requested with an empty path.
    #[error("entry file path is empty")]
    EmptyEntryFile,

    /// An entry file was requested that the registry does not know about.
    #[error("entry file '{0}' is not present in the extracted data")]
    EntryFileNotFound(String),

    /// A requested plugin could not be loaded.
    #[error(transparent)]
    PluginLoad(#[from] PluginLoadError),
}

/// Plugin resolution failures. Always fatal for the run.
#[derive(Debug, Error)]
pub enum PluginLoadError {
    /// No module with the given name is registered in the catalog.
    #[error("plugin '{0}' was not found")]
    ModuleNotFound(String),

    /// The plugin manifest could not be read.
    #[error("failed to read plugin manifest '{path}': {error}")]
    Manifest {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The plugin manifest is not valid TOML.
    #[error("invalid plugin manifest '{path}': {message}")]
    InvalidManifest {
        /// Path of the manifest.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The manifest asks for an export the module does not provide.
    #[error("plugin '{module}' does not export '{export}'")]
    ExportNotFound {
        /// Module name.
        module: String,
        /// Requested export name.
        export: String,
    },
}

impl PluginLoadError {
    /// Name or path of the plugin this error is about.
    pub fn plugin(&self) -> String {
        match self {
            Self::ModuleNotFound(name) => name.clone(),
            Self::Manifest { path, .. } | Self::InvalidManifest { path, .. } => {
                path.display().to_string()
            }
            Self::ExportNotFound { module, .. } => module.clone(),
        }
    }
}
