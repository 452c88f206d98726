use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{render_definition_head, render_parameters, render_type_section, serialize};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

/// Class methods, interface methods and call or construct signatures.
#[derive(Debug, Default)]
pub struct MethodPlugin;

impl Plugin for MethodPlugin {
    fn name(&self) -> &str {
        "method"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[
            ApiDefinitionKind::ClassMethod,
            ApiDefinitionKind::Method,
            ApiDefinitionKind::Call,
            ApiDefinitionKind::Construct,
        ]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        let definition = serialize(options, item);
        PluginResultData::concat([
            render_definition_head(options, &*definition),
            render_parameters(options, item),
            render_type_section(options, "Return type", item.return_type.as_ref()),
        ])
    }
}
