//! Plugin module resolution.
//!
//! Plugin modules are registered explicitly in a [`PluginCatalog`]. A plugin
//! is requested either by module name or by the path of a TOML manifest:
//!
//! ```toml
//! module = "source-links"
//! exports = ["source-links"]
//! ```
//!
//! `exports` is optional; without it every plugin of the module is loaded.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use super::Plugin;
use crate::error::PluginLoadError;

/// Builds the plugins a module exports.
pub type PluginExports = fn() -> Vec<Arc<dyn Plugin>>;

/// A named set of plugins.
#[derive(Clone, Copy)]
pub struct PluginModule {
    pub name: &'static str,
    pub exports: PluginExports,
}

impl PluginModule {
    pub const fn new(name: &'static str, exports: PluginExports) -> Self {
        Self { name, exports }
    }
}

/// Registered plugin modules, looked up by name.
#[derive(Clone, Default)]
pub struct PluginCatalog {
    modules: IndexMap<&'static str, PluginModule>,
}

impl PluginCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module. A module with the same name is replaced.
    pub fn register(&mut self, module: PluginModule) {
        self.modules.insert(module.name, module);
    }

    pub fn get(&self, name: &str) -> Option<&PluginModule> {
        self.modules.get(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.modules.keys().copied().collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginManifest {
    module: String,
    #[serde(default)]
    exports: Option<Vec<String>>,
}

/// Resolves plugin names and manifest paths against a catalog.
pub struct PluginLoader<'c> {
    catalog: &'c PluginCatalog,
}

impl<'c> PluginLoader<'c> {
    pub fn new(catalog: &'c PluginCatalog) -> Self {
        Self { catalog }
    }

    /// Loads the plugins named by a module name or a manifest path.
    pub async fn load(&self, name_or_path: &str) -> Result<Vec<Arc<dyn Plugin>>, PluginLoadError> {
        if !is_manifest_path(name_or_path) {
            let module = self
                .catalog
                .get(name_or_path)
                .ok_or_else(|| PluginLoadError::ModuleNotFound(name_or_path.to_string()))?;
            tracing::debug!(module = module.name, "loading plugin module");
            return Ok((module.exports)());
        }

        let path = PathBuf::from(name_or_path);
        let manifest = read_manifest(&path).await?;
        let module = self
            .catalog
            .get(&manifest.module)
            .ok_or_else(|| PluginLoadError::ModuleNotFound(manifest.module.clone()))?;
        tracing::debug!(
            module = module.name,
            manifest = %path.display(),
            "loading plugin module from manifest"
        );

        let plugins = (module.exports)();
        let Some(exports) = manifest.exports else {
            return Ok(plugins);
        };

        exports
            .iter()
            .map(|export| {
                plugins
                    .iter()
                    .find(|plugin| plugin.name() == export)
                    .cloned()
                    .ok_or_else(|| PluginLoadError::ExportNotFound {
                        module: manifest.module.clone(),
                        export: export.clone(),
                    })
            })
            .collect()
    }

    /// Loads every requested plugin in order, stopping at the first failure.
    pub async fn load_all<I, S>(&self, names: I) -> Result<Vec<Arc<dyn Plugin>>, PluginLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plugins = Vec::new();
        for name in names {
            plugins.extend(self.load(name.as_ref()).await?);
        }
        Ok(plugins)
    }
}

fn is_manifest_path(name_or_path: &str) -> bool {
    name_or_path.contains('/') || name_or_path.contains('\\') || name_or_path.ends_with(".toml")
}

async fn read_manifest(path: &Path) -> Result<PluginManifest, PluginLoadError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| PluginLoadError::Manifest {
            path: path.to_path_buf(),
            error,
        })?;

    toml::from_str(&source).map_err(|error| PluginLoadError::InvalidManifest {
        path: path.to_path_buf(),
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::ApiDefinitionKind;
    use crate::model::ApiItemRecord;
    use crate::plugin::{PluginOptions, PluginResultData};

    struct Named(&'static str);

    impl Plugin for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
            &[ApiDefinitionKind::Any]
        }

        fn render<'a>(&self, _options: &PluginOptions<'a>, _item: &'a ApiItemRecord) -> PluginResultData {
            PluginResultData::default()
        }
    }

    fn exports() -> Vec<Arc<dyn Plugin>> {
        vec![Arc::new(Named("alpha")), Arc::new(Named("beta"))]
    }

    fn catalog() -> PluginCatalog {
        let mut catalog = PluginCatalog::new();
        catalog.register(PluginModule::new("greek", exports));
        catalog
    }

    #[tokio::test]
    async fn test_load_by_name() {
        let catalog = catalog();
        let plugins = PluginLoader::new(&catalog).load("greek").await.unwrap();
        let names: Vec<&str> = plugins.iter().map(|plugin| plugin.name()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_unknown_module_fails() {
        let catalog = catalog();
        let error = PluginLoader::new(&catalog).load("latin").await.err().unwrap();
        assert!(matches!(error, PluginLoadError::ModuleNotFound(ref name) if name == "latin"));
        assert_eq!(error.plugin(), "latin");
    }

    #[tokio::test]
    async fn test_manifest_selects_exports() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("plugins.toml");
        std::fs::write(&manifest, "module = \"greek\"\nexports = [\"beta\"]\n").unwrap();

        let catalog = catalog();
        let plugins = PluginLoader::new(&catalog)
            .load(manifest.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name(), "beta");
    }

    #[tokio::test]
    async fn test_manifest_with_unknown_export_fails() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("plugins.toml");
        std::fs::write(&manifest, "module = \"greek\"\nexports = [\"gamma\"]\n").unwrap();

        let catalog = catalog();
        let error = PluginLoader::new(&catalog)
            .load(manifest.to_str().unwrap())
            .await
            .err()
            .unwrap();
        assert!(matches!(error, PluginLoadError::ExportNotFound { ref export, .. } if export == "gamma"));
    }

    #[tokio::test]
    async fn test_missing_manifest_fails() {
        let catalog = catalog();
        let error = PluginLoader::new(&catalog)
            .load("./does/not/exist.toml")
            .await
            .err()
            .unwrap();
        assert!(matches!(error, PluginLoadError::Manifest { .. }));
    }

    #[tokio::test]
    async fn test_invalid_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("broken.toml");
        std::fs::write(&manifest, "module = ").unwrap();

        let catalog = catalog();
        let error = PluginLoader::new(&catalog)
            .load(manifest.to_str().unwrap())
            .await
            .err()
            .unwrap();
        assert!(matches!(error, PluginLoadError::InvalidManifest { .. }));
    }

    #[tokio::test]
    async fn test_load_all_stops_at_first_failure() {
        let catalog = catalog();
        let result = PluginLoader::new(&catalog)
            .load_all(["greek", "latin", "greek"])
            .await;
        assert!(result.is_err());
    }
}
