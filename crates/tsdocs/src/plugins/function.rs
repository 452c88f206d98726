use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{render_definition_head, render_parameters, render_type_section, serialize};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

#[derive(Debug, Default)]
pub struct FunctionPlugin;

impl Plugin for FunctionPlugin {
    fn name(&self) -> &str {
        "function"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::Function]
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

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::factory::SerializerFactory;
    use crate::plugin::base::resolve_anchors;
    use crate::model::ApiItemReference;
    use crate::plugin::RenderConfig;
    use crate::test_utils::{basic_type, record, reference_type, references, RegistryBuilder};

    #[test]
    fn test_renders_signature_parameters_and_return_type() {
        let mut parameter = record(ApiDefinitionKind::Parameter, "options");
        parameter.r#type = Some(reference_type("Options", Some("3")));
        parameter.is_optional = true;

        let mut function = record(ApiDefinitionKind::Function, "start");
        function.parameters = Some(vec![references("options", &["2"])]);
        function.return_type = Some(basic_type("void"));

        let extract = RegistryBuilder::new()
            .item("1", function)
            .item("2", parameter)
            .item("3", record(ApiDefinitionKind::Interface, "Options"))
            .build();
        let factory = SerializerFactory::new();
        let reference = ApiItemReference::new("1", "start");
        let config = RenderConfig::default();
        let options = PluginOptions {
            extracted_data: &extract,
            reference: &reference,
            factory: &factory,
            config: &config,
        };

        let data = FunctionPlugin.render(&options, extract.get("1").unwrap());

        assert_eq!(data.headings[0].heading, "start(options)");
        assert_eq!(data.result[0], "### start(options)");
        assert!(data
            .result
            .contains(&"function start(options?: Options): void;".to_string()));
        let rows: Vec<String> = data
            .result
            .iter()
            .map(|line| resolve_anchors(line, &FxHashMap::default()))
            .collect();
        assert!(rows.contains(&"| options | [Options](#options) | Yes |".to_string()));
        assert!(data.result.contains(&"**Return type**".to_string()));
        assert_eq!(data.used_references, vec!["3"]);
    }
}
