use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{queue_members, render_definition_head, serialize};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

/// Renders a class and queues its members.
#[derive(Debug, Default)]
pub struct ClassPlugin;

impl Plugin for ClassPlugin {
    fn name(&self) -> &str {
        "class"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::Class]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        let definition = serialize(options, item);
        render_definition_head(options, &*definition).merge(queue_members(options, item))
    }
}
