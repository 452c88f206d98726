//! Extracted API registry model.
//!
//! Records mirror the extractor's JSON output. They are deliberately loose:
//! every kind-specific field is optional and only the serialized wrappers in
//! [`crate::api_items`] give them a typed meaning.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::kinds::{ApiDefinitionKind, ApiTypeKind};

/// Identifier of an item in the [`Registry`].
pub type ApiItemId = String;

/// Mapping from item identifier to record, in extraction order.
pub type Registry = IndexMap<ApiItemId, ApiItemRecord>;

/// Top-level artifact produced by the extractor.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtractDto {
    /// Every extracted item, keyed by id.
    pub registry: Registry,
    /// Ids of the source files the extraction started from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry_files: Vec<ApiItemId>,
}

impl ExtractDto {
    /// Parses the extractor's JSON output.
    pub fn from_json(source: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads and parses an extractor output file.
    pub async fn read(path: &Path) -> crate::Result<Self> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|error| crate::DocsError::Io {
                path: path.to_path_buf(),
                error,
            })?;
        Self::from_json(&source)
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&ApiItemRecord> {
        self.registry.get(id)
    }
}

/// Source position of a record. `line` is zero-based, `character` is reported as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub file_name: String,
    pub line: u32,
    pub character: u32,
}

impl Location {
    pub fn new(file_name: impl Into<String>, line: u32, character: u32) -> Self {
        Self {
            file_name: file_name.into(),
            line,
            character,
        }
    }
}

/// Reference as stored by the extractor: one alias naming one or more ids.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiItemReferenceDto {
    pub alias: String,
    pub ids: Vec<ApiItemId>,
}

impl ApiItemReferenceDto {
    pub fn new(alias: impl Into<String>, ids: Vec<ApiItemId>) -> Self {
        Self {
            alias: alias.into(),
            ids,
        }
    }
}

/// Flattened reference to exactly one item.
///
/// `alias` is the name to display at the point of reference, which may differ
/// from the item's own name (renamed exports).
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiItemReference {
    pub id: ApiItemId,
    pub alias: String,
}

impl ApiItemReference {
    pub fn new(id: impl Into<ApiItemId>, alias: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alias: alias.into(),
        }
    }
}

/// Access modifier of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    Public,
    Protected,
    Private,
}

impl AccessModifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// One part of a documentation comment.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationCommentPart {
    pub text: String,
    #[serde(default)]
    pub kind: String,
}

/// A JSDoc tag attached to a record.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsDocTagDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Documentation attached to a record.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiMetadata {
    #[serde(default)]
    pub documentation_comment: Vec<DocumentationCommentPart>,
    #[serde(default, rename = "JSDocTags")]
    pub jsdoc_tags: Vec<JsDocTagDto>,
}

impl ApiMetadata {
    /// Finds the first tag with the given name.
    pub fn tag(&self, name: &str) -> Option<&JsDocTagDto> {
        self.jsdoc_tags.iter().find(|tag| tag.name == name)
    }

    /// Concatenated documentation comment text.
    pub fn documentation_text(&self) -> String {
        self.documentation_comment
            .iter()
            .map(|part| part.text.as_str())
            .collect::<String>()
    }
}

/// One node of the extracted API graph.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiItemRecord {
    pub api_kind: ApiDefinitionKind,
    pub name: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ApiMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_modifier: Option<AccessModifier>,

    pub is_abstract: bool,
    pub is_static: bool,
    pub is_readonly: bool,
    pub is_optional: bool,
    pub is_async: bool,
    pub is_spread: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<ApiItemReferenceDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<ApiItemReferenceDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ApiItemReferenceDto>>,
    /// Value parameter of a set accessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<ApiItemReferenceDto>,
    /// Type parameter id of a mapped type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameter: Option<ApiItemId>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ApiType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<ApiType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint_type: Option<ApiType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_type: Option<ApiType>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<ApiType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<ApiType>,

    /// Enum member value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
    /// `const`, `let` or `var`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_declaration_type: Option<String>,

    /// Source file behind an `export * from` declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_id: Option<ApiItemId>,
    /// Items behind an import or export specifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_items: Option<Vec<ApiItemId>>,
}

impl ApiItemRecord {
    /// Creates an empty record of the given kind.
    pub fn new(api_kind: ApiDefinitionKind, name: impl Into<String>, location: Location) -> Self {
        Self {
            api_kind,
            name: name.into(),
            location,
            ..Self::default()
        }
    }

    /// Returns `true` when the record carries the given JSDoc tag.
    pub fn has_jsdoc_tag(&self, name: &str) -> bool {
        self.metadata
            .as_ref()
            .is_some_and(|metadata| metadata.tag(name).is_some())
    }
}

/// A type expression.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiType {
    pub api_type_kind: ApiTypeKind,
    pub location: Location,
    /// Source text of the expression as written.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<ApiItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<ApiType>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ApiType>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Box<ApiType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<Box<ApiType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_type: Option<Box<ApiType>>,
}

impl ApiType {
    /// Creates a type expression with the given kind and source text.
    pub fn new(api_type_kind: ApiTypeKind, text: impl Into<String>) -> Self {
        Self {
            api_type_kind,
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Default for ApiDefinitionKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl Default for ApiTypeKind {
    fn default() -> Self {
        Self::Basic
    }
}

/// Accepts either a single value or a list. Classes extend one type,
/// interfaces extend many; both arrive under `Extends`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<ApiType>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Box<ApiType>),
        Many(Vec<ApiType>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(api_type)) => vec![*api_type],
        Some(OneOrMany::Many(types)) => types,
        None => Vec::new(),
    })
}
