//! Plugin registry and dispatcher.
//!
//! Plugins are kept in registration order. Rendering an item runs every
//! plugin that names the item's kind, plus every plugin registered for
//! [`ApiDefinitionKind::Any`], and merges their results in that order.

use std::sync::Arc;

use super::{base, Plugin, PluginOptions, PluginResultData, RenderConfig};
use crate::api_items::ApiContext;
use crate::kinds::{ApiDefinitionKind, UNKNOWN_TYPE_KEYWORD};
use crate::model::{ApiItemRecord, ApiItemReference};
use crate::plugins;

/// Fallback renderer for items no plugin names explicitly: a heading naming
/// the item's kind, no body.
#[derive(Debug, Default)]
pub struct DefaultPlugin;

impl Plugin for DefaultPlugin {
    fn name(&self) -> &str {
        "default"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        base::render_heading(options, &fallback_heading(item, &options.reference.alias))
    }
}

/// `<kind> <name>`, with the alias taking the place of the record's name.
fn fallback_heading(item: &ApiItemRecord, alias: &str) -> String {
    let name = if alias.is_empty() { item.name.as_str() } else { alias };
    let heading = [item.api_kind.as_str(), name]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if heading.is_empty() {
        UNKNOWN_TYPE_KEYWORD.to_string()
    } else {
        heading
    }
}

/// Loaded plugins, in registration order.
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn Plugin>>,
    fallback: Arc<dyn Plugin>,
}

impl PluginRegistry {
    /// Create an empty registry. Every item falls back to [`DefaultPlugin`].
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            fallback: Arc::new(DefaultPlugin),
        }
    }

    /// Registry holding the built-in plugins for every documented kind.
    pub fn with_builtin_plugins() -> Self {
        let mut registry = Self::new();
        registry.extend(plugins::builtin_plugins());
        registry
    }

    /// Add a plugin after those already registered.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    pub fn extend<I>(&mut self, plugins: I)
    where
        I: IntoIterator<Item = Arc<dyn Plugin>>,
    {
        self.plugins.extend(plugins);
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Registered plugin names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    /// Plugins that will run for `kind`, in invocation order.
    pub fn plugins_for(&self, kind: &ApiDefinitionKind) -> Vec<&Arc<dyn Plugin>> {
        let explicit = self.plugins.iter().any(|plugin| plugin.supports(kind));

        let mut selected = Vec::new();
        if !explicit {
            selected.push(&self.fallback);
        }
        selected.extend(self.plugins.iter().filter(|plugin| {
            plugin.supports(kind) || plugin.supports(&ApiDefinitionKind::Any)
        }));
        selected
    }

    /// Renders one item through every applicable plugin.
    ///
    /// A reference to an id missing from the registry logs a warning and
    /// yields an empty result.
    pub fn render_reference(
        &self,
        ctx: ApiContext<'_>,
        config: &RenderConfig,
        reference: &ApiItemReference,
    ) -> PluginResultData {
        let Some(item) = ctx.extracted_data.get(&reference.id) else {
            tracing::warn!("Api item \"{}\" is missing in the registry.", reference.id);
            return PluginResultData::default();
        };

        let options = PluginOptions {
            extracted_data: ctx.extracted_data,
            reference,
            factory: ctx.factory,
            config,
        };

        let plugins = self.plugins_for(&item.api_kind);
        tracing::debug!(
            id = %reference.id,
            kind = %item.api_kind,
            plugins = plugins.len(),
            "rendering api item"
        );

        PluginResultData::concat(plugins.into_iter().map(|plugin| plugin.render(&options, item)))
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::SerializerFactory;
    use crate::plugin::PluginHeading;
    use crate::test_utils::{capture_logs, record, RegistryBuilder};

    struct Marker {
        name: &'static str,
        kinds: Vec<ApiDefinitionKind>,
    }

    impl Plugin for Marker {
        fn name(&self) -> &str {
            self.name
        }

        fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
            &self.kinds
        }

        fn render<'a>(&self, _options: &PluginOptions<'a>, _item: &'a ApiItemRecord) -> PluginResultData {
            PluginResultData {
                result: vec![self.name.to_string()],
                ..PluginResultData::default()
            }
        }
    }

    fn marker(name: &'static str, kinds: &[ApiDefinitionKind]) -> Arc<dyn Plugin> {
        Arc::new(Marker {
            name,
            kinds: kinds.to_vec(),
        })
    }

    #[test]
    fn test_matching_plugins_run_in_registration_order() {
        let mut registry = PluginRegistry::new();
        registry.register(marker("first", &[ApiDefinitionKind::Class]));
        registry.register(marker("other", &[ApiDefinitionKind::Enum]));
        registry.register(marker("any", &[ApiDefinitionKind::Any]));
        registry.register(marker("second", &[ApiDefinitionKind::Class, ApiDefinitionKind::Enum]));

        let extract = RegistryBuilder::new()
            .item("1", record(ApiDefinitionKind::Class, "Widget"))
            .build();
        let factory = SerializerFactory::new();

        let data = registry.render_reference(
            ApiContext::new(&extract, &factory),
            &RenderConfig::default(),
            &ApiItemReference::new("1", "Widget"),
        );

        assert_eq!(data.result, vec!["first", "any", "second"]);
    }

    #[test]
    fn test_default_plugin_runs_before_any_plugins() {
        let mut registry = PluginRegistry::new();
        registry.register(marker("any", &[ApiDefinitionKind::Any]));

        let extract = RegistryBuilder::new()
            .item("1", record(ApiDefinitionKind::Namespace, "Utils"))
            .build();
        let factory = SerializerFactory::new();

        let data = registry.render_reference(
            ApiContext::new(&extract, &factory),
            &RenderConfig::default(),
            &ApiItemReference::new("1", "Utils"),
        );

        assert_eq!(data.result, vec!["### namespace Utils", "", "any"]);
        assert_eq!(data.headings, vec![PluginHeading::new("1", "namespace Utils")]);
    }

    #[test]
    fn test_default_plugin_heading_names_unsupported_kind() {
        let registry = PluginRegistry::with_builtin_plugins();
        let extract = RegistryBuilder::new()
            .item("D", record(ApiDefinitionKind::from_tag("decorator"), "sealed"))
            .item("A", record(ApiDefinitionKind::from_tag("decorator"), ""))
            .build();
        let factory = SerializerFactory::new();
        let ctx = ApiContext::new(&extract, &factory);

        let named = registry.render_reference(
            ctx,
            &RenderConfig::default(),
            &ApiItemReference::new("D", "sealed"),
        );
        let anonymous = registry.render_reference(
            ctx,
            &RenderConfig::default(),
            &ApiItemReference::new("A", ""),
        );

        assert_eq!(named.headings, vec![PluginHeading::new("D", "decorator sealed")]);
        assert_eq!(anonymous.result, vec!["### decorator", ""]);
    }

    #[test]
    fn test_missing_item_yields_empty_result() {
        let registry = PluginRegistry::with_builtin_plugins();
        let extract = RegistryBuilder::new().build();
        let factory = SerializerFactory::new();

        let (data, logs) = capture_logs(|| {
            registry.render_reference(
                ApiContext::new(&extract, &factory),
                &RenderConfig::default(),
                &ApiItemReference::new("404", "Ghost"),
            )
        });

        assert!(data.is_empty());
        assert_eq!(logs.warnings(), vec!["Api item \"404\" is missing in the registry."]);
    }
}
