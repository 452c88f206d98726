use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{render_definition_head, serialize};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

#[derive(Debug, Default)]
pub struct TypeAliasPlugin;

impl Plugin for TypeAliasPlugin {
    fn name(&self) -> &str {
        "type-alias"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::TypeAlias]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        render_definition_head(options, &*serialize(options, item))
    }
}
