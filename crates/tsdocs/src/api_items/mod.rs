//! Renderable wrappers over extracted records.
//!
//! Every API item kind and every type expression kind has a wrapper that can
//! produce a heading, block text and inline text. Wrappers borrow the
//! extracted data for the duration of one render pass and resolve nested
//! records through the [`SerializerFactory`] carried in [`ApiContext`].

pub mod definitions;
pub mod types;

use once_cell::unsync::OnceCell;
use tracing::Level;

use crate::factory::SerializerFactory;
use crate::helpers::log_with_location;
use crate::kinds::UNKNOWN_TYPE_KEYWORD;
use crate::model::{
    ApiItemRecord, ApiItemReference, ApiItemReferenceDto, ApiType, ExtractDto, Location,
};

/// Renders a reference to another item, given its display name and, when
/// known, its id. Plugins pass a link renderer, everything else the plain one.
pub type ReferenceRenderHandler<'r> = &'r dyn Fn(&str, Option<&str>) -> String;

/// Renders the name without decoration.
pub fn default_reference_renderer(name: &str, _reference_id: Option<&str>) -> String {
    name.to_string()
}

/// Boxed definition wrapper borrowing from the extracted data.
pub type BoxedDefinition<'a> = Box<dyn SerializedApiDefinition + 'a>;

/// Boxed type wrapper borrowing from the extracted data.
pub type BoxedType<'a> = Box<dyn SerializedApiType + 'a>;

/// Read-only state shared by every wrapper of a render pass.
#[derive(Clone, Copy)]
pub struct ApiContext<'a> {
    pub extracted_data: &'a ExtractDto,
    pub factory: &'a SerializerFactory,
}

impl<'a> ApiContext<'a> {
    pub fn new(extracted_data: &'a ExtractDto, factory: &'a SerializerFactory) -> Self {
        Self {
            extracted_data,
            factory,
        }
    }

    /// Builds the wrapper registered for the record's kind.
    pub fn serialize_definition(
        self,
        item: &'a ApiItemRecord,
        reference: ApiItemReference,
    ) -> BoxedDefinition<'a> {
        self.factory.serialize_api_definition(self, item, reference)
    }

    /// Builds the wrapper registered for the type's kind.
    pub fn serialize_type(self, api_type: &'a ApiType) -> BoxedType<'a> {
        self.factory.serialize_api_type(self, api_type)
    }

    /// Looks up a record, warning at `origin` when it is absent.
    pub fn resolve_item(self, id: &str, origin: &Location) -> Option<&'a ApiItemRecord> {
        let item = self.extracted_data.get(id);
        if item.is_none() {
            log_with_location(
                Level::WARN,
                origin,
                &format!("Api item \"{id}\" is missing in the registry."),
            );
        }
        item
    }
}

/// Renderable view of one API item record.
pub trait SerializedApiDefinition {
    fn api_item(&self) -> &ApiItemRecord;

    fn reference(&self) -> &ApiItemReference;

    /// Display name: the reference alias when present, the record name otherwise.
    fn name(&self) -> &str {
        let alias = &self.reference().alias;
        if alias.is_empty() {
            &self.api_item().name
        } else {
            alias
        }
    }

    /// Short name for headings and tables of contents.
    fn to_heading_text(&self) -> String;

    /// Full code representation, one entry per line.
    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String>;

    /// Single-line form for embedding in a parent's text.
    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        self.to_text(render)
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Renderable view of one type expression.
pub trait SerializedApiType {
    fn api_type(&self) -> &ApiType;

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String;

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![self.to_inline_text(render)]
    }

    fn to_heading_text(&self) -> String {
        self.api_type().text.clone()
    }
}

/// State and helpers shared by the definition wrappers.
pub struct ApiDefinitionBase<'a> {
    ctx: ApiContext<'a>,
    item: &'a ApiItemRecord,
    reference: ApiItemReference,
    type_parameters: OnceCell<Vec<BoxedDefinition<'a>>>,
    parameters: OnceCell<Vec<BoxedDefinition<'a>>>,
    members: OnceCell<Vec<BoxedDefinition<'a>>>,
}

impl<'a> ApiDefinitionBase<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            ctx,
            item,
            reference,
            type_parameters: OnceCell::new(),
            parameters: OnceCell::new(),
            members: OnceCell::new(),
        }
    }

    pub fn ctx(&self) -> ApiContext<'a> {
        self.ctx
    }

    pub fn item(&self) -> &'a ApiItemRecord {
        self.item
    }

    pub fn reference(&self) -> &ApiItemReference {
        &self.reference
    }

    pub fn name(&self) -> &str {
        if self.reference.alias.is_empty() {
            &self.item.name
        } else {
            &self.reference.alias
        }
    }

    /// Name for headings, falling back to the kind tag for anonymous items.
    pub fn heading_name(&self) -> String {
        let name = self.name();
        let kind = self.item.api_kind.as_str();
        if !name.is_empty() {
            name.to_string()
        } else if !kind.is_empty() {
            kind.to_string()
        } else {
            UNKNOWN_TYPE_KEYWORD.to_string()
        }
    }

    /// Inline text of a type, or the `unknown` keyword when absent.
    pub fn type_to_string(
        &self,
        render: ReferenceRenderHandler<'_>,
        api_type: Option<&'a ApiType>,
    ) -> String {
        match api_type {
            Some(api_type) => self.ctx.serialize_type(api_type).to_inline_text(render),
            None => UNKNOWN_TYPE_KEYWORD.to_string(),
        }
    }

    /// Resolved type parameters, computed once.
    pub fn type_parameters(&self) -> &[BoxedDefinition<'a>] {
        self.type_parameters
            .get_or_init(|| self.resolve_definitions(self.item.type_parameters.as_deref()))
    }

    /// Resolved parameters, computed once.
    pub fn parameters(&self) -> &[BoxedDefinition<'a>] {
        self.parameters
            .get_or_init(|| self.resolve_definitions(self.item.parameters.as_deref()))
    }

    /// Resolved members, computed once.
    pub fn members(&self) -> &[BoxedDefinition<'a>] {
        self.members
            .get_or_init(|| self.resolve_definitions(self.item.members.as_deref()))
    }

    /// `<T, U extends X>`, or an empty string without type parameters.
    pub fn type_parameters_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let type_parameters = self.type_parameters();
        if type_parameters.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = type_parameters
            .iter()
            .map(|type_parameter| type_parameter.to_inline_text(render))
            .collect();
        format!("<{}>", rendered.join(", "))
    }

    /// Comma separated parameter list without the surrounding parentheses.
    pub fn parameters_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        self.parameters()
            .iter()
            .map(|parameter| parameter.to_inline_text(render))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parameter names only, as used in headings.
    pub fn parameter_names(&self) -> String {
        self.parameters()
            .iter()
            .map(|parameter| parameter.name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `public `, `static `, `abstract `... prefix for class members.
    pub fn modifiers_prefix(&self) -> String {
        let mut prefix = String::new();
        if let Some(access_modifier) = self.item.access_modifier {
            prefix.push_str(access_modifier.as_str());
            prefix.push(' ');
        }
        if self.item.is_static {
            prefix.push_str("static ");
        }
        if self.item.is_abstract {
            prefix.push_str("abstract ");
        }
        prefix
    }

    fn resolve_definitions(
        &self,
        references: Option<&'a [ApiItemReferenceDto]>,
    ) -> Vec<BoxedDefinition<'a>> {
        let mut resolved = Vec::new();
        for reference in references.unwrap_or_default() {
            for id in &reference.ids {
                if let Some(item) = self.ctx.resolve_item(id, &self.item.location) {
                    resolved.push(
                        self.ctx
                            .serialize_definition(item, ApiItemReference::new(id.clone(), &reference.alias)),
                    );
                }
            }
        }
        resolved
    }
}

/// Implements the accessor half of [`SerializedApiDefinition`] for wrappers
/// holding an [`ApiDefinitionBase`] in a field named `base`.
macro_rules! delegate_to_base {
    () => {
        fn api_item(&self) -> &$crate::model::ApiItemRecord {
            self.base.item()
        }

        fn reference(&self) -> &$crate::model::ApiItemReference {
            self.base.reference()
        }
    };
}

pub(crate) use delegate_to_base;
