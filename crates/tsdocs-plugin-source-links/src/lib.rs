//! Source location links for tsdocs.
//!
//! This crate provides a plugin that runs for every item kind and appends a
//! "Defined in" line pointing at the item's declaration. With a base URL the
//! line becomes a link, e.g. into a repository browser:
//!
//! ```text
//! Defined in [src/index.ts:12](https://example.com/blob/main/src/index.ts#L12)
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tsdocs::PluginRegistry;
//! use tsdocs_plugin_source_links::{SourceLinksOptions, SourceLinksPlugin};
//!
//! let mut registry = PluginRegistry::with_builtin_plugins();
//! registry.register(Arc::new(SourceLinksPlugin::with_options(
//!     SourceLinksOptions::new().with_base_url("https://example.com/blob/main"),
//! )));
//! ```

use std::sync::Arc;

use tsdocs::generators::markdown::{inline_code, italic, link};
use tsdocs::helpers::standardize_path;
use tsdocs::model::{ApiItemRecord, Location};
use tsdocs::{ApiDefinitionKind, Plugin, PluginModule, PluginOptions, PluginResultData};

/// Name under which the plugin module is registered.
pub const MODULE_NAME: &str = "source-links";

/// Environment variable read by the module's default export.
pub const BASE_URL_ENV: &str = "SOURCE_LINKS_BASE_URL";

/// Options for [`SourceLinksPlugin`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLinksOptions {
    /// Prefix for links. Without it locations are rendered as inline code.
    pub base_url: Option<String>,
    /// Path prefix removed from file names before display.
    pub strip_prefix: Option<String>,
}

impl SourceLinksOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(prefix.into());
        self
    }

    /// Reads the base URL from [`BASE_URL_ENV`].
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty()),
            strip_prefix: None,
        }
    }
}

/// Appends the declaration site of every rendered item.
#[derive(Debug, Clone, Default)]
pub struct SourceLinksPlugin {
    options: SourceLinksOptions,
}

impl SourceLinksPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SourceLinksOptions) -> Self {
        Self { options }
    }

    fn display_path(&self, location: &Location) -> String {
        let path = standardize_path(&location.file_name);
        match self.options.strip_prefix.as_deref() {
            Some(prefix) => path
                .strip_prefix(&standardize_path(prefix))
                .map(|stripped| stripped.trim_start_matches('/').to_string())
                .unwrap_or(path),
            None => path,
        }
    }

    /// `Defined in ...` line for a location. Lines are shown one-based.
    pub fn source_line(&self, location: &Location) -> String {
        let path = self.display_path(location);
        let line = location.line + 1;
        let label = format!("{path}:{line}");

        let target = match self.options.base_url.as_deref() {
            Some(base_url) => link(
                &label,
                &format!("{}/{path}#L{line}", base_url.trim_end_matches('/')),
            ),
            None => inline_code(&label),
        };
        italic(&format!("Defined in {target}"))
    }
}

impl Plugin for SourceLinksPlugin {
    fn name(&self) -> &str {
        MODULE_NAME
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::Any]
    }

    fn render<'a>(&self, _options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        if item.location.file_name.is_empty() {
            tracing::debug!(name = %item.name, "item has no source location");
            return PluginResultData::default();
        }

        PluginResultData {
            result: vec![self.source_line(&item.location), String::new()],
            ..PluginResultData::default()
        }
    }
}

fn exports() -> Vec<Arc<dyn Plugin>> {
    vec![Arc::new(SourceLinksPlugin::with_options(
        SourceLinksOptions::from_env(),
    ))]
}

/// Plugin module for registration in a [`tsdocs::PluginCatalog`].
pub fn module() -> PluginModule {
    PluginModule::new(MODULE_NAME, exports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_creation() {
        let plugin = SourceLinksPlugin::new();
        assert_eq!(plugin.name(), "source-links");
        assert_eq!(
            plugin.supported_api_definition_kinds(),
            &[ApiDefinitionKind::Any]
        );
    }

    #[test]
    fn test_source_line_without_base_url() {
        let plugin = SourceLinksPlugin::new();
        let location = Location::new("src\\index.ts", 11, 0);
        assert_eq!(plugin.source_line(&location), "_Defined in `src/index.ts:12`_");
    }

    #[test]
    fn test_source_line_with_base_url() {
        let plugin = SourceLinksPlugin::with_options(
            SourceLinksOptions::new()
                .with_base_url("https://example.com/blob/main/")
                .with_strip_prefix("/work/project"),
        );
        let location = Location::new("/work/project/src/a.ts", 0, 4);
        assert_eq!(
            plugin.source_line(&location),
            "_Defined in [src/a.ts:1](https://example.com/blob/main/src/a.ts#L1)_"
        );
    }

    #[test]
    fn test_module_exports_one_plugin() {
        let module = module();
        assert_eq!(module.name, MODULE_NAME);
        let plugins = (module.exports)();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name(), MODULE_NAME);
    }
}
