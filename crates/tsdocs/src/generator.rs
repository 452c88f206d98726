//! Entry-file driven documentation generation.
//!
//! For every entry file the generator finds its source file record, flattens
//! the exported items, filters out excluded and private ones, and renders
//! each through the [`PluginRegistry`]. Members queued by a plugin are
//! rendered right after their parent, depth-first.

use std::path::PathBuf;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::api_items::ApiContext;
use crate::error::{DocsError, Result};
use crate::factory::SerializerFactory;
use crate::generators::markdown::{link, MarkdownBuilder};
use crate::helpers::{heading_anchor, standardize_path, JsDocTag, MARKDOWN_EXT};
use crate::kinds::ApiDefinitionKind;
use crate::model::{AccessModifier, ApiItemId, ApiItemRecord, ApiItemReference, ExtractDto};
use crate::plugin::base::resolve_anchors;
use crate::plugin::{
    PluginCatalog, PluginHeading, PluginLoader, PluginRegistry, PluginResultData, RenderConfig,
};
use crate::references::flatten_references;

/// Options controlling what gets rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Entry file paths as they appear in the extracted data.
    pub entry_files: Vec<String>,
    /// Path prefixes whose items are left out.
    pub exclude: Vec<String>,
    /// Leave out private members and items tagged `@private`.
    pub exclude_private_api: bool,
    pub skip_table_of_contents: bool,
    pub render: RenderConfig,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            entry_files: Vec::new(),
            exclude: Vec::new(),
            exclude_private_api: true,
            skip_table_of_contents: false,
            render: RenderConfig::default(),
        }
    }
}

/// Markdown rendered for one entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Entry file as requested.
    pub entry: String,
    /// Output path, relative to the output directory.
    pub path: PathBuf,
    pub lines: Vec<String>,
    pub headings: Vec<PluginHeading>,
    pub used_references: Vec<ApiItemId>,
}

impl RenderedFile {
    /// File contents with a trailing newline.
    pub fn contents(&self) -> String {
        let mut contents = self.lines.join("\n");
        contents.push('\n');
        contents
    }
}

/// Renders entry files of one extracted registry.
pub struct Generator<'a> {
    extract: &'a ExtractDto,
    registry: &'a PluginRegistry,
    options: &'a GeneratorOptions,
    factory: SerializerFactory,
}

impl<'a> Generator<'a> {
    pub fn new(
        extract: &'a ExtractDto,
        registry: &'a PluginRegistry,
        options: &'a GeneratorOptions,
    ) -> Self {
        Self {
            extract,
            registry,
            options,
            factory: SerializerFactory::new(),
        }
    }

    /// Replaces the built-in serializer factory.
    pub fn with_factory(mut self, factory: SerializerFactory) -> Self {
        self.factory = factory;
        self
    }

    /// Renders every configured entry file, in order.
    pub fn render(&self) -> Result<Vec<RenderedFile>> {
        self.options
            .entry_files
            .iter()
            .map(|entry| self.render_entry(entry))
            .collect()
    }

    /// Renders a single entry file.
    pub fn render_entry(&self, entry: &str) -> Result<RenderedFile> {
        if normalize_entry(entry).trim().is_empty() {
            return Err(DocsError::EmptyEntryFile);
        }
        let (source_file_id, source_file) = self
            .find_source_file(entry)
            .ok_or_else(|| DocsError::EntryFileNotFound(entry.to_string()))?;
        tracing::debug!(entry, id = %source_file_id, "rendering entry file");

        let ctx = ApiContext::new(self.extract, &self.factory);
        let items = flatten_references(
            &self.extract.registry,
            source_file.members.as_deref().unwrap_or_default(),
        );

        let mut visited = FxHashSet::default();
        let mut data = PluginResultData::default();
        for reference in &items {
            self.render_tree(ctx, reference, &mut visited, &mut data);
        }

        let body: Vec<String> = {
            let anchors = heading_anchors(&data.headings);
            let by_id = anchors_by_id(&data.headings, &anchors);
            data.result
                .iter()
                .map(|line| resolve_anchors(line, &by_id))
                .collect()
        };

        let mut builder = MarkdownBuilder::new().header(entry, 1).empty_line();
        if !self.options.skip_table_of_contents {
            builder = builder.text(table_of_contents(&data.headings, &data.used_references));
        }
        let lines = builder.text(body).get_output();

        Ok(RenderedFile {
            entry: entry.to_string(),
            path: output_path(entry),
            lines,
            headings: data.headings,
            used_references: data.used_references,
        })
    }

    fn render_tree(
        &self,
        ctx: ApiContext<'_>,
        reference: &ApiItemReference,
        visited: &mut FxHashSet<(ApiItemId, String)>,
        data: &mut PluginResultData,
    ) {
        if let Some(item) = self.extract.get(&reference.id) {
            if !self.is_included(item) {
                tracing::debug!(id = %reference.id, name = %item.name, "skipping excluded item");
                return;
            }
        }
        if !visited.insert((reference.id.clone(), reference.alias.clone())) {
            return;
        }

        let mut rendered = self
            .registry
            .render_reference(ctx, &self.options.render, reference);
        let members = std::mem::take(&mut rendered.members);
        data.extend(rendered);

        for member in &members {
            self.render_tree(ctx, member, visited, data);
        }
    }

    fn is_included(&self, item: &ApiItemRecord) -> bool {
        let file_name = standardize_path(&item.location.file_name);
        let excluded = self
            .options
            .exclude
            .iter()
            .map(|prefix| normalize_entry(prefix))
            .any(|prefix| !prefix.is_empty() && normalize_entry(&file_name).starts_with(&prefix));
        if excluded {
            return false;
        }

        if self.options.exclude_private_api {
            let private = item.access_modifier == Some(AccessModifier::Private)
                || item.has_jsdoc_tag(JsDocTag::Private.as_str());
            if private {
                return false;
            }
        }
        true
    }

    fn find_source_file(&self, entry: &str) -> Option<(&'a ApiItemId, &'a ApiItemRecord)> {
        let entry = normalize_entry(entry);
        let candidates = self.extract.registry.iter().filter(|(_, item)| {
            item.api_kind == ApiDefinitionKind::SourceFile
                && (path_matches(&item.location.file_name, &entry)
                    || path_matches(&item.name, &entry))
        });

        let mut fallback = None;
        for (id, item) in candidates {
            if self.extract.entry_files.is_empty() || self.extract.entry_files.contains(id) {
                return Some((id, item));
            }
            fallback.get_or_insert((id, item));
        }
        fallback
    }
}

/// Loads the named plugins on top of the built-in ones, then renders.
///
/// Plugin loading happens before any rendering, so a load failure produces
/// no output at all.
pub async fn generate(
    extract: &ExtractDto,
    options: &GeneratorOptions,
    catalog: &PluginCatalog,
    plugin_names: &[String],
) -> Result<Vec<RenderedFile>> {
    let plugins = PluginLoader::new(catalog).load_all(plugin_names).await?;

    let mut registry = PluginRegistry::with_builtin_plugins();
    registry.extend(plugins);
    tracing::debug!(plugins = ?registry.names(), "plugins registered");

    Generator::new(extract, &registry, options).render()
}

/// `src/index.ts` becomes `src/index.md`.
pub fn output_path(entry: &str) -> PathBuf {
    PathBuf::from(normalize_entry(entry)).with_extension(MARKDOWN_EXT.trim_start_matches('.'))
}

fn normalize_entry(path: &str) -> String {
    let path = standardize_path(path);
    path.trim_start_matches("./").to_string()
}

/// Whether `path` is `entry` or ends with it at a path component boundary.
fn path_matches(path: &str, entry: &str) -> bool {
    let path = normalize_entry(path);
    match path.strip_suffix(entry) {
        Some(prefix) => prefix.is_empty() || prefix.ends_with('/'),
        None => false,
    }
}

/// GitHub-style anchor of every heading, numbering repeats.
pub fn heading_anchors(headings: &[PluginHeading]) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    headings
        .iter()
        .map(|heading| {
            let base = heading_anchor(&heading.heading);
            let mut anchor = base.clone();
            let mut suffix = 0;
            while !seen.insert(anchor.clone()) {
                suffix += 1;
                anchor = format!("{base}-{suffix}");
            }
            anchor
        })
        .collect()
}

/// Anchor of the first heading rendered for each item.
fn anchors_by_id<'h>(
    headings: &'h [PluginHeading],
    anchors: &'h [String],
) -> FxHashMap<&'h str, &'h str> {
    let mut by_id = FxHashMap::default();
    for (heading, anchor) in headings.iter().zip(anchors) {
        by_id
            .entry(heading.api_item_id.as_str())
            .or_insert(anchor.as_str());
    }
    by_id
}

/// Bulleted list of links to every heading.
///
/// Anchors follow GitHub's scheme, numbering repeated headings. References
/// to items that have no heading in this file are reported, since their
/// links cannot resolve.
pub fn table_of_contents(headings: &[PluginHeading], used_references: &[ApiItemId]) -> Vec<String> {
    if headings.is_empty() {
        return Vec::new();
    }

    let entries: Vec<String> = headings
        .iter()
        .zip(heading_anchors(headings))
        .map(|(heading, anchor)| link(&heading.heading, &format!("#{anchor}")))
        .collect();

    let documented: FxHashSet<&str> = headings
        .iter()
        .map(|heading| heading.api_item_id.as_str())
        .collect();
    for id in used_references {
        if !documented.contains(id.as_str()) {
            tracing::debug!(id = %id, "referenced item is not documented in this file");
        }
    }

    MarkdownBuilder::new()
        .header("Table of contents", 2)
        .empty_line()
        .unordered_list(entries)
        .get_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("src/index.ts"), PathBuf::from("src/index.md"));
        assert_eq!(output_path("./lib\\main.tsx"), PathBuf::from("lib/main.md"));
    }

    #[test]
    fn test_table_of_contents_numbers_duplicates() {
        let headings = vec![
            PluginHeading::new("1", "Widget"),
            PluginHeading::new("2", "constructor(a, b)"),
            PluginHeading::new("3", "Widget"),
        ];

        let toc = table_of_contents(&headings, &[]);
        assert_eq!(
            toc,
            vec![
                "## Table of contents",
                "",
                "- [Widget](#widget)",
                "- [constructor(a, b)](#constructora-b)",
                "- [Widget](#widget-1)",
                "",
            ]
        );
    }

    #[test]
    fn test_path_matches_whole_components() {
        assert!(path_matches("src/index.ts", "index.ts"));
        assert!(path_matches("index.ts", "index.ts"));
        assert!(path_matches("./src/index.ts", "src/index.ts"));
        assert!(path_matches("C:\\repo\\src\\index.ts", "src/index.ts"));
        assert!(!path_matches("src/reindex.ts", "index.ts"));
        assert!(!path_matches("lib/src/index.tsx", "src/index.ts"));
    }

    #[test]
    fn test_anchors_by_id_keeps_first_heading() {
        let headings = vec![
            PluginHeading::new("1", "run(a)"),
            PluginHeading::new("2", "Widget"),
            PluginHeading::new("3", "Widget"),
            PluginHeading::new("2", "Alias"),
        ];
        let anchors = heading_anchors(&headings);
        let by_id = anchors_by_id(&headings, &anchors);

        assert_eq!(by_id["1"], "runa");
        assert_eq!(by_id["2"], "widget");
        assert_eq!(by_id["3"], "widget-1");
    }

    #[test]
    fn test_empty_table_of_contents() {
        assert!(table_of_contents(&[], &["1".to_string()]).is_empty());
    }
}
