use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{queue_members, render_definition_head, serialize};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

#[derive(Debug, Default)]
pub struct NamespacePlugin;

impl Plugin for NamespacePlugin {
    fn name(&self) -> &str {
        "namespace"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::Namespace]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        let definition = serialize(options, item);
        render_definition_head(options, &*definition).merge(queue_members(options, item))
    }
}
