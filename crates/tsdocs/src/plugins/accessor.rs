use crate::api_items::definitions::ApiAccessor;
use crate::kinds::ApiDefinitionKind;
use crate::model::ApiItemRecord;
use crate::plugin::base::{render_definition_head, render_type_section};
use crate::plugin::{Plugin, PluginOptions, PluginResultData};

/// Get and set accessors: signature block and the accessor's type.
#[derive(Debug, Default)]
pub struct ClassAccessorPlugin;

impl Plugin for ClassAccessorPlugin {
    fn name(&self) -> &str {
        "accessor"
    }

    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind] {
        &[ApiDefinitionKind::GetAccessor, ApiDefinitionKind::SetAccessor]
    }

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData {
        let accessor = ApiAccessor::new(options.ctx(), item, options.reference.clone());
        render_definition_head(options, &accessor)
            .merge(render_type_section(options, "Type", accessor.api_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::SerializerFactory;
    use crate::model::{ApiItemReference, Location};
    use crate::plugin::RenderConfig;
    use crate::test_utils::{basic_type, capture_logs, record, references, RegistryBuilder};

    fn render(extract: &crate::model::ExtractDto, id: &str) -> (PluginResultData, crate::test_utils::CapturedLogs) {
        let factory = SerializerFactory::new();
        let reference = ApiItemReference::new(id, "");
        let config = RenderConfig::default();
        let options = PluginOptions {
            extracted_data: extract,
            reference: &reference,
            factory: &factory,
            config: &config,
        };
        capture_logs(|| ClassAccessorPlugin.render(&options, extract.get(id).unwrap()))
    }

    #[test]
    fn test_setter_with_missing_parameter_warns_once() {
        let mut setter = record(ApiDefinitionKind::SetAccessor, "value");
        setter.location = Location::new("src/widget.ts", 11, 4);
        setter.parameter = Some(references("v", &["404"]));

        let extract = RegistryBuilder::new().item("1", setter).build();
        let (data, logs) = render(&extract, "1");

        assert!(data.result.contains(&"set value(unknown);".to_string()));
        assert_eq!(
            logs.warnings(),
            vec!["src/widget.ts(12,4): A set accessor parameter is missing!"]
        );
    }

    #[test]
    fn test_setter_type_comes_from_parameter() {
        let mut parameter = record(ApiDefinitionKind::Parameter, "v");
        parameter.r#type = Some(basic_type("number"));
        let mut setter = record(ApiDefinitionKind::SetAccessor, "value");
        setter.parameter = Some(references("v", &["2"]));

        let extract = RegistryBuilder::new()
            .item("1", setter)
            .item("2", parameter)
            .build();
        let (data, logs) = render(&extract, "1");

        assert!(data.result.contains(&"set value(v: number);".to_string()));
        assert!(data.result.contains(&"**Type**".to_string()));
        assert!(data.result.contains(&"number".to_string()));
        assert!(logs.warnings().is_empty());
    }

    #[test]
    fn test_getter_renders_type() {
        let mut getter = record(ApiDefinitionKind::GetAccessor, "size");
        getter.r#type = Some(basic_type("number"));
        getter.is_static = true;

        let extract = RegistryBuilder::new().item("1", getter).build();
        let (data, _) = render(&extract, "1");

        assert_eq!(data.headings[0].heading, "get size");
        assert!(data.result.contains(&"static get size(): number;".to_string()));
    }
}
