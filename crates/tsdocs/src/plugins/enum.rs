use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{render_definition_head, serialize};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

/// Renders an enum with its members inline in the code block.
#[derive(Debug, Default)]
pub struct EnumPlugin;

impl Plugin for EnumPlugin {
    fn name(&self) -> &str {
        "enum"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::Enum]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        render_definition_head(options, &*serialize(options, item))
    }
}
