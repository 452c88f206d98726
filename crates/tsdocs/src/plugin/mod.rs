//! Plugin contract and render results.
//!
//! A plugin renders one API item into markdown lines. Plugins declare the
//! item kinds they handle; the [`PluginRegistry`] picks every plugin that
//! applies to an item and merges their [`PluginResultData`] in registration
//! order.

pub mod base;
mod loader;
mod registry;

pub use loader::{PluginCatalog, PluginExports, PluginLoader, PluginModule};
pub use registry::{DefaultPlugin, PluginRegistry};

use crate::api_items::ApiContext;
use crate::factory::SerializerFactory;
use crate::kinds::ApiDefinitionKind;
use crate::model::{ApiItemId, ApiItemRecord, ApiItemReference, ExtractDto};

/// Render settings shared by every plugin of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Markdown heading level of an item.
    pub heading_level: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { heading_level: 3 }
    }
}

/// Everything a plugin may consult while rendering one item.
#[derive(Clone, Copy)]
pub struct PluginOptions<'a> {
    pub extracted_data: &'a ExtractDto,
    pub reference: &'a ApiItemReference,
    pub factory: &'a SerializerFactory,
    pub config: &'a RenderConfig,
}

impl<'a> PluginOptions<'a> {
    pub fn ctx(&self) -> ApiContext<'a> {
        ApiContext::new(self.extracted_data, self.factory)
    }
}

/// A pluggable renderer for one or more item kinds.
///
/// Plugins hold no state across invocations beyond what they were
/// constructed with.
pub trait Plugin: Send + Sync {
    /// Unique name, used by manifests to select exports.
    fn name(&self) -> &str;

    /// Kinds this plugin renders. [`ApiDefinitionKind::Any`] matches every item.
    fn supported_api_definition_kinds(&self) -> &[ApiDefinitionKind];

    fn render<'a>(&self, options: &PluginOptions<'a>, item: &'a ApiItemRecord) -> PluginResultData;

    /// Returns `true` when the plugin names `kind` explicitly.
    fn supports(&self, kind: &ApiDefinitionKind) -> bool {
        self.supported_api_definition_kinds().contains(kind)
    }
}

/// Heading produced for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginHeading {
    pub api_item_id: ApiItemId,
    pub heading: String,
}

impl PluginHeading {
    pub fn new(api_item_id: impl Into<ApiItemId>, heading: impl Into<String>) -> Self {
        Self {
            api_item_id: api_item_id.into(),
            heading: heading.into(),
        }
    }
}

/// Mergeable output of a render pass.
///
/// Merging concatenates each field, keeping relative order. It is
/// associative but not commutative, and never deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginResultData {
    pub headings: Vec<PluginHeading>,
    /// Markdown lines.
    pub result: Vec<String>,
    /// Ids referenced by the rendered text.
    pub used_references: Vec<ApiItemId>,
    /// Nested items still to be rendered.
    pub members: Vec<ApiItemReference>,
}

impl PluginResultData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
            && self.result.is_empty()
            && self.used_references.is_empty()
            && self.members.is_empty()
    }

    /// Appends `other` after `self`.
    pub fn merge(mut self, other: PluginResultData) -> Self {
        self.extend(other);
        self
    }

    /// In-place form of [`PluginResultData::merge`].
    pub fn extend(&mut self, other: PluginResultData) {
        self.headings.extend(other.headings);
        self.result.extend(other.result);
        self.used_references.extend(other.used_references);
        self.members.extend(other.members);
    }

    /// Left fold of [`PluginResultData::merge`].
    pub fn concat<I>(results: I) -> Self
    where
        I: IntoIterator<Item = PluginResultData>,
    {
        results.into_iter().fold(Self::default(), Self::merge)
    }
}
