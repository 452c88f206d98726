use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{render_definition_head, render_parameters, serialize};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

#[derive(Debug, Default)]
pub struct ClassConstructorPlugin;

impl Plugin for ClassConstructorPlugin {
    fn name(&self) -> &str {
        "constructor"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::ClassConstructor]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        let definition = serialize(options, item);
        render_definition_head(options, &*definition).merge(render_parameters(options, item))
    }
}
