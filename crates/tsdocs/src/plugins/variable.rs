use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{render_definition_head, render_type_section, serialize};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

#[derive(Debug, Default)]
pub struct VariablePlugin;

impl Plugin for VariablePlugin {
    fn name(&self) -> &str {
        "variable"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::Variable]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        let definition = serialize(options, item);
        render_definition_head(options, &*definition)
            .merge(render_type_section(options, "Type", item.r#type.as_ref()))
    }
}
