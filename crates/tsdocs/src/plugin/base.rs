//! Rendering blocks shared by the built-in plugins.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use super::{PluginHeading, PluginOptions, PluginResultData};
use crate::api_items::{default_reference_renderer, BoxedDefinition, SerializedApiDefinition};
use crate::generators::markdown::{bold, inline_code, link, MarkdownBuilder};
use crate::helpers::{
    ensure_full_stop, heading_anchor, JsDocTag, DEFAULT_CODE_OPTIONS, DEFAULT_TABLE_OPTIONS,
};
use crate::model::{ApiItemId, ApiItemRecord, ApiItemReference, ApiType};
use crate::references::flatten_references;

/// Delimits a pending anchor inside rendered text.
const ANCHOR_MARK: char = '\u{1f}';

/// Reference renderer producing in-page links and remembering every id it
/// was asked to link.
///
/// Link targets stay pending until the headings of the whole file are known.
/// [`resolve_anchors`] then points each link at the heading of the item it
/// references.
#[derive(Debug, Default)]
pub struct ReferenceLinks {
    used: RefCell<Vec<ApiItemId>>,
}

impl ReferenceLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// `[name](#anchor)` for references with an id, `name` otherwise.
    pub fn render(&self, name: &str, reference_id: Option<&str>) -> String {
        match reference_id {
            Some(id) => {
                self.used.borrow_mut().push(id.to_string());
                link(name, &format!("#{}", pending_anchor(id, name)))
            }
            None => name.to_string(),
        }
    }

    pub fn into_used_references(self) -> Vec<ApiItemId> {
        self.used.into_inner()
    }
}

fn pending_anchor(id: &str, name: &str) -> String {
    format!("{ANCHOR_MARK}{id}{ANCHOR_MARK}{}{ANCHOR_MARK}", heading_anchor(name))
}

/// Replaces pending link targets with the anchor of the referenced item's
/// heading. Items without a heading in `anchors` keep the anchor derived
/// from the link text.
pub fn resolve_anchors(line: &str, anchors: &FxHashMap<&str, &str>) -> String {
    let mut resolved = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find(ANCHOR_MARK) {
        resolved.push_str(&rest[..start]);
        let mut parts = rest[start + ANCHOR_MARK.len_utf8()..].splitn(3, ANCHOR_MARK);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(fallback), Some(tail)) => {
                resolved.push_str(anchors.get(id).copied().unwrap_or(fallback));
                rest = tail;
            }
            _ => {
                resolved.extend(rest[start..].chars().filter(|c| *c != ANCHOR_MARK));
                rest = "";
            }
        }
    }
    resolved.push_str(rest);
    resolved
}

/// Wraps the item being rendered.
pub fn serialize<'a>(options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> BoxedDefinition<'a> {
    options
        .ctx()
        .serialize_definition(item, options.reference.clone())
}

/// Heading line plus the heading record for the table of contents.
pub fn render_heading(options: &PluginOptions<'_>, heading: &str) -> PluginResultData {
    PluginResultData {
        headings: vec![PluginHeading::new(&options.reference.id, heading)],
        result: MarkdownBuilder::new()
            .header(heading, options.config.heading_level)
            .empty_line()
            .get_output(),
        ..PluginResultData::default()
    }
}

/// Deprecation and beta notices, summary, documentation comment and examples.
pub fn render_metadata(item: &ApiItemRecord) -> Vec<String> {
    let Some(metadata) = item.metadata.as_ref() else {
        return Vec::new();
    };
    let mut builder = MarkdownBuilder::new();

    if let Some(tag) = metadata.tag(JsDocTag::Deprecated.as_str()) {
        let notice = match tag.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => {
                format!("{} {}", bold("Deprecated:"), ensure_full_stop(text, "."))
            }
            _ => bold("Deprecated"),
        };
        builder = builder.blockquote(&notice).empty_line();
    }
    if metadata.tag(JsDocTag::Beta.as_str()).is_some() {
        builder = builder
            .blockquote(&format!("{} This API is in beta and may change.", bold("Beta:")))
            .empty_line();
    }
    if let Some(summary) = metadata
        .tag(JsDocTag::Summary.as_str())
        .and_then(|tag| tag.text.as_deref())
    {
        builder = builder.text([ensure_full_stop(summary, ".")]).empty_line();
    }

    let documentation = metadata.documentation_text();
    if !documentation.trim().is_empty() {
        builder = builder
            .text(documentation.trim().lines().map(str::to_string))
            .empty_line();
    }

    let examples: Vec<&str> = metadata
        .jsdoc_tags
        .iter()
        .filter(|tag| tag.name == JsDocTag::Example.as_str())
        .filter_map(|tag| tag.text.as_deref())
        .collect();
    if !examples.is_empty() {
        builder = builder.text([bold("Examples")]).empty_line();
        for example in examples {
            builder = builder.code(example.trim().lines(), DEFAULT_CODE_OPTIONS);
        }
    }

    builder.get_output()
}

/// Fenced TypeScript block with the wrapper's code text.
pub fn render_code(definition: &dyn SerializedApiDefinition) -> Vec<String> {
    MarkdownBuilder::new()
        .code(definition.to_text(&default_reference_renderer), DEFAULT_CODE_OPTIONS)
        .get_output()
}

/// `**Type**` section with linked type text.
pub fn render_type_section(
    options: &PluginOptions<'_>,
    title: &str,
    api_type: Option<&ApiType>,
) -> PluginResultData {
    let Some(api_type) = api_type else {
        return PluginResultData::default();
    };

    let links = ReferenceLinks::new();
    let render = |name: &str, id: Option<&str>| links.render(name, id);
    let text = options
        .ctx()
        .serialize_type(api_type)
        .to_inline_text(&render);

    PluginResultData {
        result: MarkdownBuilder::new()
            .text([bold(title)])
            .empty_line()
            .text([text])
            .empty_line()
            .get_output(),
        used_references: links.into_used_references(),
        ..PluginResultData::default()
    }
}

/// Parameters table: name, linked type, optional flag, default and description.
pub fn render_parameters(options: &PluginOptions<'_>, item: &ApiItemRecord) -> PluginResultData {
    let ctx = options.ctx();
    let links = ReferenceLinks::new();
    let render = |name: &str, id: Option<&str>| links.render(name, id);

    let mut rows = Vec::new();
    for group in item.parameters.as_deref().unwrap_or_default() {
        for id in &group.ids {
            let Some(parameter) = ctx.resolve_item(id, &item.location) else {
                continue;
            };
            let api_type = match parameter.r#type.as_ref() {
                Some(api_type) => ctx.serialize_type(api_type).to_inline_text(&render),
                None => String::new(),
            };
            let description = parameter
                .metadata
                .as_ref()
                .map(|metadata| metadata.documentation_text().trim().to_string())
                .unwrap_or_default();

            rows.push(vec![
                parameter.name.clone(),
                api_type,
                if parameter.is_optional { "Yes".to_string() } else { String::new() },
                parameter.initializer.as_deref().map(inline_code).unwrap_or_default(),
                description,
            ]);
        }
    }
    if rows.is_empty() {
        return PluginResultData::default();
    }

    PluginResultData {
        result: MarkdownBuilder::new()
            .text([bold("Parameters")])
            .empty_line()
            .table(
                &["Name", "Type", "Optional", "Default value", "Description"],
                &rows,
                DEFAULT_TABLE_OPTIONS,
            )
            .get_output(),
        used_references: links.into_used_references(),
        ..PluginResultData::default()
    }
}

/// Queues the item's members for rendering, flattening re-exports.
pub fn queue_members(options: &PluginOptions<'_>, item: &ApiItemRecord) -> PluginResultData {
    let members: Vec<ApiItemReference> = match item.members.as_deref() {
        Some(members) => flatten_references(&options.extracted_data.registry, members),
        None => Vec::new(),
    };
    PluginResultData {
        members,
        ..PluginResultData::default()
    }
}

/// Heading, metadata and code block: the start of every built-in plugin's output.
pub fn render_definition_head(
    options: &PluginOptions<'_>,
    definition: &dyn SerializedApiDefinition,
) -> PluginResultData {
    let mut data = render_heading(options, &definition.to_heading_text());
    data.result.extend(render_metadata(definition.api_item()));
    data.result.extend(render_code(definition));
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::ApiDefinitionKind;
    use crate::model::{ApiMetadata, DocumentationCommentPart, JsDocTagDto};
    use crate::test_utils::record;

    #[test]
    fn test_reference_links_collect_ids() {
        let links = ReferenceLinks::new();
        let linked = links.render("Foo", Some("7"));
        assert_eq!(resolve_anchors(&linked, &FxHashMap::default()), "[Foo](#foo)");
        assert_eq!(links.render("string", None), "string");
        assert_eq!(links.into_used_references(), vec!["7"]);
    }

    #[test]
    fn test_resolve_anchors_uses_target_heading() {
        let links = ReferenceLinks::new();
        let line = format!(
            "{} | {}",
            links.render("start", Some("1")),
            links.render("Options", Some("2"))
        );
        let anchors: FxHashMap<&str, &str> = [("1", "startoptions"), ("2", "options-1")]
            .into_iter()
            .collect();

        assert_eq!(
            resolve_anchors(&line, &anchors),
            "[start](#startoptions) | [Options](#options-1)"
        );
    }

    #[test]
    fn test_resolve_anchors_leaves_plain_text() {
        let anchors = FxHashMap::default();
        assert_eq!(resolve_anchors("| a | string |", &anchors), "| a | string |");
    }

    #[test]
    fn test_metadata_notices() {
        let mut item = record(ApiDefinitionKind::Function, "old");
        item.metadata = Some(ApiMetadata {
            documentation_comment: vec![DocumentationCommentPart {
                text: "Computes things".into(),
                kind: "text".into(),
            }],
            jsdoc_tags: vec![
                JsDocTagDto {
                    name: "deprecated".into(),
                    text: Some("use `new` instead".into()),
                },
                JsDocTagDto {
                    name: "example".into(),
                    text: Some("old();".into()),
                },
            ],
        });

        let lines = render_metadata(&item);
        assert_eq!(lines[0], "> **Deprecated:** use `new` instead.");
        assert!(lines.contains(&"Computes things".to_string()));
        assert!(lines.contains(&"```typescript".to_string()));
        assert!(lines.contains(&"old();".to_string()));
    }

    #[test]
    fn test_no_metadata_renders_nothing() {
        assert!(render_metadata(&record(ApiDefinitionKind::Class, "A")).is_empty());
    }
}
