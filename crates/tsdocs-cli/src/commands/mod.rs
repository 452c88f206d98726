//! Command implementations.
//!
//! - [`generate`] - render entry files and write markdown
//! - [`plugins`] - list loadable plugin modules

pub mod generate;
pub mod plugins;

use tsdocs::PluginCatalog;

pub use generate::execute as generate_execute;
pub use plugins::execute as plugins_execute;

/// Plugin modules shipped with the CLI, loadable by name or manifest.
pub fn plugin_catalog() -> PluginCatalog {
    let mut catalog = PluginCatalog::new();
    catalog.register(tsdocs_plugin_source_links::module());
    catalog
}
