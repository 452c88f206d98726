use once_cell::unsync::OnceCell;
use tracing::Level;

use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, BoxedDefinition, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::helpers::log_with_location;
use crate::kinds::{ApiDefinitionKind, UNKNOWN_TYPE_KEYWORD};
use crate::model::{ApiItemRecord, ApiItemReference, ApiType};

/// Get or set accessor of a class.
pub struct ApiAccessor<'a> {
    base: ApiDefinitionBase<'a>,
    parameter: OnceCell<Option<BoxedDefinition<'a>>>,
}

impl<'a> ApiAccessor<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
            parameter: OnceCell::new(),
        }
    }

    pub fn is_setter(&self) -> bool {
        self.base.item().api_kind == ApiDefinitionKind::SetAccessor
    }

    /// Declared type: the getter's type, or the setter parameter's type.
    pub fn api_type(&self) -> Option<&'a ApiType> {
        let item = self.base.item();
        if item.r#type.is_some() || !self.is_setter() {
            return item.r#type.as_ref();
        }

        let ctx = self.base.ctx();
        item.parameter
            .as_ref()
            .and_then(|parameter| parameter.ids.first())
            .and_then(|id| ctx.extracted_data.get(id))
            .and_then(|parameter| parameter.r#type.as_ref())
    }

    /// Setter value parameter, resolved once. `None` for getters and when the
    /// parameter is missing from the registry.
    pub fn parameter(&self) -> Option<&BoxedDefinition<'a>> {
        self.parameter
            .get_or_init(|| {
                if !self.is_setter() {
                    return None;
                }
                let item = self.base.item();
                let ctx = self.base.ctx();

                let resolved = item.parameter.as_ref().and_then(|parameter| {
                    let id = parameter.ids.first()?;
                    let record = ctx.extracted_data.get(id)?;
                    Some(ctx.serialize_definition(
                        record,
                        ApiItemReference::new(id.clone(), &parameter.alias),
                    ))
                });

                if resolved.is_none() {
                    log_with_location(
                        Level::WARN,
                        &item.location,
                        "A set accessor parameter is missing!",
                    );
                }
                resolved
            })
            .as_ref()
    }
}

impl SerializedApiDefinition for ApiAccessor<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        let keyword = if self.is_setter() { "set" } else { "get" };
        format!("{keyword} {}", self.base.name())
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let prefix = self.base.modifiers_prefix();
        let name = self.base.name();

        let line = if self.is_setter() {
            let parameter = match self.parameter() {
                Some(parameter) => parameter.to_inline_text(render),
                None => UNKNOWN_TYPE_KEYWORD.to_string(),
            };
            format!("{prefix}set {name}({parameter});")
        } else {
            let api_type = self.base.type_to_string(render, self.api_type());
            format!("{prefix}get {name}(): {api_type};")
        };

        vec![line]
    }
}
